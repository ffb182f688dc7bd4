use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::NodeKind;

/// Fill for insight nodes that carry no color of their own.
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#fcd34d";

/// An AI-derived node proposed by a tutoring chat.
///
/// Stored by `node_id` (last write wins) and attached under `parent_node_id`
/// on every merge pass. A missing or unknown parent means the tree root.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InsightRecord {
    pub node_id: String,
    #[serde(default)]
    pub parent_node_id: Option<String>,
    pub label: String,
    /// Also read from `type`, the key the knowledge tree uses.
    #[serde(default, alias = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weakness_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_steps: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl InsightRecord {
    pub fn new(
        node_id: impl Into<String>,
        parent_node_id: Option<&str>,
        label: impl Into<String>,
        kind: NodeKind,
    ) -> Self {
        Self {
            node_id: node_id.into(),
            parent_node_id: parent_node_id.map(str::to_string),
            label: label.into(),
            kind,
            weakness_summary: None,
            action_steps: None,
            color: None,
        }
    }
}
