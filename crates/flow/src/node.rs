use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::id::NodeId;

/// The data carried by a single node in the flow graph.
///
/// This is the shape the parent renderer hands to port and parameter
/// widgets. Node-specific values live in the `fields` map; the widget
/// layer treats them as opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub id: NodeId,

    /// Node type identifier, e.g. `"openai_model"`.
    pub kind: String,

    /// Human-readable name shown in the node header.
    pub display_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Node-specific values, keyed by field name.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub fields: HashMap<String, serde_json::Value>,
}

impl NodeData {
    /// Create node data with a fresh random ID.
    #[must_use]
    pub fn new(kind: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: NodeId::random(),
            kind: kind.into(),
            display_name: display_name.into(),
            description: None,
            fields: HashMap::new(),
        }
    }

    /// Set the description (builder-style, consuming).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set a field value (builder-style, consuming).
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Look up a field value by name.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&serde_json::Value> {
        self.fields.get(key)
    }
}
