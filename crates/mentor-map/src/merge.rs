//! Attach insight-derived nodes to a copy of the knowledge tree.
//!
//! Rules, applied per insight:
//! 1. the target parent is `parent_node_id`, or the root when absent;
//! 2. a same-id child of the target is replaced in place (position and
//!    children kept), otherwise the node is appended as the last child;
//! 3. an unknown target falls back to the root before rule 2 is applied, so
//!    no insight is ever dropped.
//!
//! Node ids stay unique across the tree: an insight whose id already lives
//! under a different parent moves that node, and one naming the root id
//! updates the root in place.

use std::borrow::Cow;
use std::collections::HashSet;

pub use mentor_core::entities::DEFAULT_HIGHLIGHT_COLOR;
use mentor_core::entities::{InsightRecord, KnowledgeNode};

use crate::traverse;

#[derive(Debug, Clone)]
pub struct TreeMerger {
    highlight_color: String,
}

impl Default for TreeMerger {
    fn default() -> Self {
        Self::new(DEFAULT_HIGHLIGHT_COLOR)
    }
}

impl TreeMerger {
    pub fn new(highlight_color: impl Into<String>) -> Self {
        Self {
            highlight_color: highlight_color.into(),
        }
    }

    /// Merge `insights` into a copy of `base`.
    ///
    /// With no insights, `base` is returned borrowed and nothing is cloned.
    #[must_use]
    pub fn merge<'a>(
        &self,
        base: &'a KnowledgeNode,
        insights: &[InsightRecord],
    ) -> Cow<'a, KnowledgeNode> {
        if insights.is_empty() {
            return Cow::Borrowed(base);
        }

        let mut tree = base.clone();
        for insight in dependency_order(base, insights) {
            self.apply(&mut tree, insight);
        }
        Cow::Owned(tree)
    }

    /// Build the node an insight contributes.
    #[must_use]
    pub fn node_from(&self, insight: &InsightRecord) -> KnowledgeNode {
        KnowledgeNode {
            id: insight.node_id.clone(),
            label: insight.label.clone(),
            kind: insight.kind,
            children: Vec::new(),
            color: Some(
                insight
                    .color
                    .clone()
                    .unwrap_or_else(|| self.highlight_color.clone()),
            ),
            description: insight.weakness_summary.clone(),
            recommendations: insight.action_steps.clone().unwrap_or_default(),
        }
    }

    fn apply(&self, tree: &mut KnowledgeNode, insight: &InsightRecord) {
        let mut incoming = self.node_from(insight);

        if incoming.id == tree.id {
            tracing::debug!(node_id = %incoming.id, "insight targets the root; updating in place");
            replace_keeping_children(tree, incoming);
            return;
        }

        let target = match insight.parent_node_id.as_deref() {
            Some(parent) if parent == insight.node_id => {
                tracing::debug!(node_id = %insight.node_id, "insight names itself as parent; using root");
                tree.id.clone()
            }
            Some(parent) => parent.to_string(),
            None => tree.id.clone(),
        };

        let parent_id = if traverse::contains(tree, &target) {
            target
        } else {
            tracing::debug!(
                node_id = %incoming.id,
                parent = %target,
                "insight parent not found; attaching to root"
            );
            tree.id.clone()
        };

        if let Some(parent) = traverse::find_mut(tree, &parent_id) {
            if let Some(existing) = parent.children.iter_mut().find(|c| c.id == incoming.id) {
                replace_keeping_children(existing, incoming);
                return;
            }
        }

        if let Some(previous) = traverse::detach(tree, &incoming.id) {
            tracing::debug!(node_id = %incoming.id, to = %parent_id, "moving existing node to new parent");
            incoming.children = previous.children;
        }

        // The parent is gone only if it sat inside the subtree just detached.
        match traverse::find_mut(tree, &parent_id) {
            Some(parent) => parent.children.push(incoming),
            None => tree.children.push(incoming),
        }
    }
}

/// Merge with the default highlight color.
#[must_use]
pub fn merge_insights<'a>(
    base: &'a KnowledgeNode,
    insights: &[InsightRecord],
) -> Cow<'a, KnowledgeNode> {
    TreeMerger::default().merge(base, insights)
}

fn replace_keeping_children(existing: &mut KnowledgeNode, mut incoming: KnowledgeNode) {
    incoming.children = std::mem::take(&mut existing.children);
    *existing = incoming;
}

/// Order a batch so an insight whose parent is another insight of the same
/// batch comes after it.
///
/// Parents already present in `base` never cause a wait. The order is
/// otherwise stable, a record never overtakes an earlier record with the same
/// id, and members of a dependency cycle keep their input order.
#[must_use]
pub fn dependency_order<'a>(
    base: &KnowledgeNode,
    insights: &'a [InsightRecord],
) -> Vec<&'a InsightRecord> {
    let base_ids: HashSet<&str> = traverse::preorder(base)
        .map(|(_, node)| node.id.as_str())
        .collect();

    let mut placed: HashSet<&str> = HashSet::new();
    let mut ordered = Vec::with_capacity(insights.len());
    let mut pending: Vec<&InsightRecord> = insights.iter().collect();

    while !pending.is_empty() {
        let before = pending.len();
        let providers: HashSet<&str> = pending.iter().map(|&i| i.node_id.as_str()).collect();
        let mut deferred: Vec<&InsightRecord> = Vec::new();
        let mut deferred_ids: HashSet<&str> = HashSet::new();

        for insight in pending {
            let waits_for_parent = insight.parent_node_id.as_deref().is_some_and(|parent| {
                parent != insight.node_id
                    && !base_ids.contains(parent)
                    && !placed.contains(parent)
                    && providers.contains(parent)
            });

            if waits_for_parent || deferred_ids.contains(insight.node_id.as_str()) {
                deferred_ids.insert(insight.node_id.as_str());
                deferred.push(insight);
            } else {
                placed.insert(insight.node_id.as_str());
                ordered.push(insight);
            }
        }

        if deferred.len() == before {
            // No progress this pass: a cycle. Keep input order for the rest.
            ordered.extend(deferred);
            break;
        }
        pending = deferred;
    }

    ordered
}
