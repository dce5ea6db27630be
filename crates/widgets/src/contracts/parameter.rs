use serde::{Deserialize, Serialize};

use filament_flow::{NodeData, PortType};

use crate::side::Side;

/// Props for a labeled node port: the non-visual metadata plus what the
/// rendering layer needs to lay it out.
///
/// Used for both plain parameters and input parameters; `side` tells the
/// renderer which column the port belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterContract {
    /// The owning node's data.
    pub node: NodeData,

    /// Label shown next to the port.
    pub title: String,

    /// Identifier of the port within the node.
    pub id: String,

    /// Display color, e.g. a hex string or theme token.
    pub color: String,

    pub side: Side,

    /// Declared data type of the port.
    pub port_type: PortType,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub disabled: bool,

    /// Tooltip text shown on hover.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl ParameterContract {
    #[must_use]
    pub fn new(
        node: NodeData,
        title: impl Into<String>,
        id: impl Into<String>,
        color: impl Into<String>,
        side: Side,
        port_type: PortType,
    ) -> Self {
        Self {
            node,
            title: title.into(),
            id: id.into(),
            color: color.into(),
            side,
            port_type,
            required: false,
            disabled: false,
            info: None,
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    #[must_use]
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }
}
