use serde::{Deserialize, Serialize};

use crate::placement::Placement;

/// Props for a hover-info wrapper around an arbitrary element.
///
/// Generic over the wrapped content: the contract does not care what the
/// rendering layer wraps, only where the tooltip anchors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipContract<C> {
    /// The wrapped element.
    pub content: C,

    /// Text shown in the tooltip.
    pub title: String,

    #[serde(default)]
    pub placement: Placement,
}

impl<C> TooltipContract<C> {
    #[must_use]
    pub fn new(content: C, title: impl Into<String>) -> Self {
        Self {
            content,
            title: title.into(),
            placement: Placement::default(),
        }
    }

    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }
}
