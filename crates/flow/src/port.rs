use std::fmt;

use serde::{Deserialize, Serialize};

/// The declared data type of a node or flow port.
///
/// Used by the rendering layer to color handles and by the connection
/// logic to decide whether two ports may be linked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortType {
    /// String data.
    Text,
    /// Numeric data.
    Number,
    /// Boolean data.
    Boolean,
    /// Ordered sequence of values.
    Array,
    /// Object/map data.
    Object,
    /// Generic, matches any type.
    Any,
    /// A named application-defined type.
    Custom(String),
}

impl PortType {
    /// Check if this type may connect to another.
    #[must_use]
    pub fn is_compatible(&self, other: &PortType) -> bool {
        match (self, other) {
            // Any matches everything.
            (Self::Any, _) | (_, Self::Any) => true,

            // Numbers can be stringified.
            (Self::Number, Self::Text) => true,

            (a, b) => a == b,
        }
    }

    /// Display name for handles and tooltips.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "Text",
            Self::Number => "Number",
            Self::Boolean => "Boolean",
            Self::Array => "Array",
            Self::Object => "Object",
            Self::Any => "Any",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for PortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
