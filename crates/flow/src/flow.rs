use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::id::FlowId;

/// The data carried by a whole flow.
///
/// Flow-level handles bind to this rather than to a single node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowData {
    pub id: FlowId,

    /// Human-readable flow name.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Flow-level values, keyed by name.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub data: HashMap<String, serde_json::Value>,
}

impl FlowData {
    /// Create flow data with a fresh random ID.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: FlowId::random(),
            name: name.into(),
            description: None,
            data: HashMap::new(),
        }
    }

    /// Set the description (builder-style, consuming).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set a value (builder-style, consuming).
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }

    /// Look up a value by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }
}
