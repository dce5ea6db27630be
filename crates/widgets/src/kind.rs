use serde::{Deserialize, Serialize};

/// The kind of a widget contract.
///
/// One variant per contract shape. Parents use this to pick a widget and
/// to classify contracts without matching on the concrete types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Input,
    Toggle,
    Dropdown,
    Parameter,
    Handle,
    InputList,
    TextArea,
    File,
    Disclosure,
    Float,
    Tooltip,
    FlowHandle,
}

impl WidgetKind {
    /// String identifier for serialization/logging.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Toggle => "toggle",
            Self::Dropdown => "dropdown",
            Self::Parameter => "parameter",
            Self::Handle => "handle",
            Self::InputList => "input_list",
            Self::TextArea => "text_area",
            Self::File => "file",
            Self::Disclosure => "disclosure",
            Self::Float => "float",
            Self::Tooltip => "tooltip",
            Self::FlowHandle => "flow_handle",
        }
    }

    /// Whether the widget edits free-form text.
    #[must_use]
    pub const fn is_text_based(self) -> bool {
        matches!(self, Self::Input | Self::TextArea | Self::Float)
    }

    /// Whether the widget anchors connections on a node or flow.
    #[must_use]
    pub const fn is_port_anchor(self) -> bool {
        matches!(self, Self::Parameter | Self::Handle | Self::FlowHandle)
    }

    /// Whether the contract wraps arbitrary child content.
    #[must_use]
    pub const fn wraps_content(self) -> bool {
        matches!(self, Self::Tooltip | Self::Disclosure)
    }

    /// Whether the `on_change` callback may carry a string sequence as
    /// well as a single string.
    #[must_use]
    pub const fn accepts_multi_value(self) -> bool {
        matches!(self, Self::InputList | Self::TextArea | Self::File)
    }

    /// The value shape this widget reports through its callbacks.
    #[must_use]
    pub const fn value_type(self) -> &'static str {
        match self {
            Self::Input | Self::Dropdown | Self::Float => "string",
            Self::TextArea | Self::File => "string_or_array",
            Self::Toggle => "boolean",
            Self::InputList => "array",
            Self::Parameter | Self::Handle | Self::FlowHandle | Self::Tooltip | Self::Disclosure => {
                "none"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [WidgetKind; 12] = [
        WidgetKind::Input,
        WidgetKind::Toggle,
        WidgetKind::Dropdown,
        WidgetKind::Parameter,
        WidgetKind::Handle,
        WidgetKind::InputList,
        WidgetKind::TextArea,
        WidgetKind::File,
        WidgetKind::Disclosure,
        WidgetKind::Float,
        WidgetKind::Tooltip,
        WidgetKind::FlowHandle,
    ];

    #[test]
    fn as_str_round_trips_through_serde() {
        for kind in ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));

            let deserialized: WidgetKind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, deserialized);
        }
    }

    #[test]
    fn port_anchors_carry_no_value() {
        for kind in ALL {
            if kind.is_port_anchor() {
                assert_eq!(kind.value_type(), "none", "{kind:?}");
            }
        }
    }

    #[test]
    fn multi_value_kinds_match_the_union_callback() {
        let multi: Vec<WidgetKind> = ALL
            .into_iter()
            .filter(|k| k.accepts_multi_value())
            .collect();
        assert_eq!(
            multi,
            vec![WidgetKind::InputList, WidgetKind::TextArea, WidgetKind::File]
        );
    }

    #[test]
    fn content_wrappers() {
        assert!(WidgetKind::Tooltip.wraps_content());
        assert!(WidgetKind::Disclosure.wraps_content());
        assert!(!WidgetKind::Input.wraps_content());
    }

    #[test]
    fn text_based_classification() {
        assert!(WidgetKind::Input.is_text_based());
        assert!(WidgetKind::TextArea.is_text_based());
        assert!(WidgetKind::Float.is_text_based());
        assert!(!WidgetKind::Toggle.is_text_based());
        assert!(!WidgetKind::Dropdown.is_text_based());
    }
}
