//! Collapsible "learning path" outline.

use mentor_core::entities::KnowledgeNode;
use mentor_core::enums::{MasteryStatus, NodeKind};
use serde::Serialize;

use super::{Expansion, score_percent};
use crate::ProgressOverlay;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutlineRow {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub depth: usize,
    pub parent_id: Option<String>,
    pub expanded: bool,
    pub has_children: bool,
    pub status: MasteryStatus,
    pub score: Option<f64>,
}

/// Flatten the visible part of `tree` in display order.
#[must_use]
pub fn outline(
    tree: &KnowledgeNode,
    progress: &ProgressOverlay,
    expansion: &Expansion,
) -> Vec<OutlineRow> {
    let mut rows = Vec::new();
    push_rows(tree, None, 0, progress, expansion, &mut rows);
    rows
}

fn push_rows(
    node: &KnowledgeNode,
    parent_id: Option<&str>,
    depth: usize,
    progress: &ProgressOverlay,
    expansion: &Expansion,
    rows: &mut Vec<OutlineRow>,
) {
    let has_children = !node.children.is_empty();
    let expanded = has_children && expansion.is_expanded(&node.id, depth);
    rows.push(OutlineRow {
        id: node.id.clone(),
        label: node.label.clone(),
        kind: node.kind,
        depth,
        parent_id: parent_id.map(str::to_string),
        expanded,
        has_children,
        status: progress.status_of(&node.id),
        score: progress.score_of(&node.id),
    });

    if expanded {
        for child in &node.children {
            push_rows(child, Some(&node.id), depth + 1, progress, expansion, rows);
        }
    }
}

/// Render rows as an indented text outline with a status marker per row.
#[must_use]
pub fn render_text(rows: &[OutlineRow]) -> String {
    rows.iter()
        .map(|row| {
            let marker = match (row.has_children, row.expanded) {
                (false, _) => ' ',
                (true, true) => '-',
                (true, false) => '+',
            };
            let score = score_percent(row.score)
                .map(|percent| format!(" ({percent})"))
                .unwrap_or_default();
            format!(
                "{indent}{marker} {label} [{status}]{score}",
                indent = "  ".repeat(row.depth),
                label = row.label,
                status = row.status.label(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
