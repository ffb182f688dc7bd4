//! Radial mind-map canvas layout.
//!
//! The root sits at the origin. A node at depth `d` sits on the ring of
//! radius `d * ring_spacing`, in the middle of the angular sector its parent
//! hands it. Sectors are split between siblings in proportion to how many
//! visible leaves each one carries, so wide subtrees get more room.

use std::f64::consts::TAU;

use mentor_core::entities::KnowledgeNode;
use mentor_core::enums::{MasteryStatus, NodeKind};
use serde::Serialize;

use super::Expansion;
use crate::ProgressOverlay;

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlacedNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub depth: usize,
    pub position: Point,
    /// Fill color from the mastery tier.
    pub color: &'static str,
    /// The node's own color, drawn as its border.
    pub accent: Option<String>,
    pub status: MasteryStatus,
    pub score: Option<f64>,
    pub expanded: bool,
    pub has_children: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Edge {
    pub id: String,
    pub from: String,
    pub to: String,
    pub from_pos: Point,
    pub to_pos: Point,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct RadialLayout {
    pub nodes: Vec<PlacedNode>,
    pub edges: Vec<Edge>,
}

impl RadialLayout {
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&PlacedNode> {
        self.nodes.iter().find(|node| node.id == id)
    }
}

struct Context<'a> {
    progress: &'a ProgressOverlay,
    expansion: &'a Expansion,
    ring_spacing: f64,
    layout: RadialLayout,
}

/// Lay out every visible node of `tree`.
#[must_use]
pub fn radial_layout(
    tree: &KnowledgeNode,
    progress: &ProgressOverlay,
    expansion: &Expansion,
    ring_spacing: f64,
) -> RadialLayout {
    let mut ctx = Context {
        progress,
        expansion,
        ring_spacing,
        layout: RadialLayout::default(),
    };
    place(tree, 0, 0.0, TAU, &mut ctx);
    ctx.layout
}

fn place(node: &KnowledgeNode, depth: usize, start: f64, end: f64, ctx: &mut Context<'_>) -> Point {
    let position = if depth == 0 {
        Point::default()
    } else {
        let angle = (start + end) / 2.0;
        #[allow(clippy::cast_precision_loss)]
        let radius = depth as f64 * ctx.ring_spacing;
        Point {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    };

    let has_children = !node.children.is_empty();
    let expanded = has_children && ctx.expansion.is_expanded(&node.id, depth);
    let status = ctx.progress.status_of(&node.id);
    ctx.layout.nodes.push(PlacedNode {
        id: node.id.clone(),
        label: node.label.clone(),
        kind: node.kind,
        depth,
        position,
        color: status.color(),
        accent: node.color.clone(),
        status,
        score: ctx.progress.score_of(&node.id),
        expanded,
        has_children,
    });

    if expanded {
        let leaves: Vec<usize> = node
            .children
            .iter()
            .map(|child| visible_leaves(child, depth + 1, ctx.expansion))
            .collect();
        #[allow(clippy::cast_precision_loss)]
        let total = leaves.iter().sum::<usize>() as f64;

        let mut cursor = start;
        for (child, weight) in node.children.iter().zip(leaves) {
            #[allow(clippy::cast_precision_loss)]
            let span = (end - start) * weight as f64 / total;
            let child_pos = place(child, depth + 1, cursor, cursor + span, ctx);
            ctx.layout.edges.push(Edge {
                id: format!("{}->{}", node.id, child.id),
                from: node.id.clone(),
                to: child.id.clone(),
                from_pos: position,
                to_pos: child_pos,
            });
            cursor += span;
        }
    }

    position
}

fn visible_leaves(node: &KnowledgeNode, depth: usize, expansion: &Expansion) -> usize {
    if node.children.is_empty() || !expansion.is_expanded(&node.id, depth) {
        return 1;
    }
    node.children
        .iter()
        .map(|child| visible_leaves(child, depth + 1, expansion))
        .sum()
}
