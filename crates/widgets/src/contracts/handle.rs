use serde::{Deserialize, Serialize};

use crate::contracts::ParameterContract;

/// Props for a connectable port anchor on a node.
///
/// A strict superset of [`ParameterContract`]: everything the parameter
/// carries plus where the anchor sits in its column and whether it renders
/// filled (connected) or hollow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandleContract {
    #[serde(flatten)]
    pub parameter: ParameterContract,

    /// Ordinal position of the anchor within its side's column.
    pub position: u32,

    #[serde(default)]
    pub fill: bool,
}

impl HandleContract {
    #[must_use]
    pub fn new(parameter: ParameterContract, position: u32) -> Self {
        Self {
            parameter,
            position,
            fill: false,
        }
    }

    #[must_use]
    pub fn filled(mut self) -> Self {
        self.fill = true;
        self
    }
}
