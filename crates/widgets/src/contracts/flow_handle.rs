use serde::{Deserialize, Serialize};

use filament_flow::FlowData;

use crate::side::Side;

/// Props for a port anchor bound to a whole flow rather than a single node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowHandleContract {
    /// The owning flow's data.
    pub flow: FlowData,

    /// Label shown next to the anchor.
    pub title: String,

    /// Identifier of the anchor within the flow.
    pub id: String,

    /// Display color, e.g. a hex string or theme token.
    pub color: String,

    pub side: Side,

    #[serde(default)]
    pub required: bool,

    /// Tooltip text shown on hover.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl FlowHandleContract {
    #[must_use]
    pub fn new(
        flow: FlowData,
        title: impl Into<String>,
        id: impl Into<String>,
        color: impl Into<String>,
        side: Side,
    ) -> Self {
        Self {
            flow,
            title: title.into(),
            id: id.into(),
            color: color.into(),
            side,
            required: false,
            info: None,
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }
}
