//! Node detail card shown when a node is clicked.

use mentor_core::entities::KnowledgeNode;
use mentor_core::enums::{MasteryStatus, NodeKind};
use serde::Serialize;

use super::score_percent;
use crate::ProgressOverlay;
use crate::traverse;

/// Shown instead of a percentage when the node has no positive score.
pub const NOT_TESTED: &str = "not tested";

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NodeDetail {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub description: Option<String>,
    pub recommendations: Vec<String>,
    pub status: MasteryStatus,
    pub status_label: &'static str,
    pub score_text: String,
    /// Ids from the root down to this node.
    pub path: Vec<String>,
}

/// Detail card for `id`, or `None` if the tree has no such node.
#[must_use]
pub fn node_detail(tree: &KnowledgeNode, id: &str, progress: &ProgressOverlay) -> Option<NodeDetail> {
    let node = traverse::find(tree, id)?;
    let status = progress.status_of(id);
    let score_text =
        score_percent(progress.score_of(id)).unwrap_or_else(|| NOT_TESTED.to_string());

    Some(NodeDetail {
        id: node.id.clone(),
        label: node.label.clone(),
        kind: node.kind,
        description: node.description.clone(),
        recommendations: node.recommendations.clone(),
        status,
        status_label: status.label(),
        score_text,
        path: traverse::path_to(tree, id),
    })
}
