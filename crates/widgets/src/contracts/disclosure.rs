use crate::callback::Callback;

/// An action button shown in a disclosure header.
#[derive(Debug, Clone)]
pub struct ActionButton {
    /// Button label.
    pub label: String,

    /// Icon name, resolved by the rendering layer.
    pub icon: Option<String>,

    pub on_click: Option<Callback<()>>,
}

impl ActionButton {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            on_click: None,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn on_click(mut self, callback: Callback<()>) -> Self {
        self.on_click = Some(callback);
        self
    }
}

/// The header button descriptor of a disclosure panel.
#[derive(Debug, Clone)]
pub struct DisclosureHeader {
    /// Header title.
    pub title: String,

    /// Action buttons shown alongside the title.
    pub actions: Vec<ActionButton>,
}

impl DisclosureHeader {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            actions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_action(mut self, action: ActionButton) -> Self {
        self.actions.push(action);
        self
    }
}

/// Props for a collapsible panel.
///
/// Generic over the child content it reveals; `open` is owned by the
/// parent, so expanding and collapsing goes through the parent's model.
#[derive(Debug, Clone)]
pub struct DisclosureContract<C> {
    /// The revealed child content.
    pub content: C,

    /// Whether the panel is expanded.
    pub open: bool,

    pub header: DisclosureHeader,
}

impl<C> DisclosureContract<C> {
    #[must_use]
    pub fn new(content: C, header: DisclosureHeader) -> Self {
        Self {
            content,
            open: false,
            header,
        }
    }

    #[must_use]
    pub fn opened(mut self) -> Self {
        self.open = true;
        self
    }
}
