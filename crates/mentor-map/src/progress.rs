//! Per-learner progress joined onto the tree by node id.
//!
//! The overlay never changes tree shape. A node without an entry is
//! "not started"; lookups never fail.

use std::collections::HashMap;

use mentor_core::entities::{KnowledgeNode, ProgressEntry};
use mentor_core::enums::MasteryStatus;
use mentor_core::errors::CoreError;
use mentor_core::mastery::MAX_SCORE;
use mentor_core::responses::MasterySummary;
use serde::Deserialize;

use crate::error::TreeError;
use crate::traverse;

/// Accepted progress documents: an id-keyed map or a list of backend rows.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProgressDocument {
    Map(HashMap<String, ProgressEntry>),
    Rows(Vec<ProgressEntry>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressOverlay {
    entries: HashMap<String, ProgressEntry>,
}

impl ProgressOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from entries; a later entry for the same node wins.
    pub fn from_entries(entries: impl IntoIterator<Item = ProgressEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.node_id.clone(), entry))
                .collect(),
        }
    }

    /// Parse a progress document.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::Json` when the text is neither an id-keyed map nor
    /// a list of rows.
    pub fn from_json_str(raw: &str) -> Result<Self, TreeError> {
        let overlay = match serde_json::from_str::<ProgressDocument>(raw)? {
            ProgressDocument::Map(map) => Self::from_entries(map.into_iter().map(
                |(node_id, mut entry)| {
                    entry.node_id = node_id;
                    entry
                },
            )),
            ProgressDocument::Rows(rows) => Self::from_entries(rows),
        };
        Ok(overlay)
    }

    /// Parse a progress document, treating any failure as "no progress".
    #[must_use]
    pub fn parse_or_empty(raw: &str) -> Self {
        Self::from_json_str(raw).unwrap_or_else(|error| {
            tracing::warn!(%error, "unusable progress document; treating as empty");
            Self::new()
        })
    }

    #[must_use]
    pub fn entry(&self, node_id: &str) -> Option<&ProgressEntry> {
        self.entries.get(node_id)
    }

    #[must_use]
    pub fn status_of(&self, node_id: &str) -> MasteryStatus {
        MasteryStatus::from_entry(self.entry(node_id))
    }

    /// Effective score of a node, if it has an entry.
    #[must_use]
    pub fn score_of(&self, node_id: &str) -> Option<f64> {
        self.entry(node_id).map(ProgressEntry::effective_score)
    }

    /// Record a first visit with score 0. An existing entry is left untouched.
    pub fn open_node(&mut self, node_id: &str) -> &ProgressEntry {
        self.entries
            .entry(node_id.to_string())
            .or_insert_with(|| ProgressEntry {
                node_id: node_id.to_string(),
                ..ProgressEntry::default()
            })
    }

    /// Record a test score: `score` becomes the latest result and `max_score`
    /// keeps the best one seen.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `score` is NaN or outside `0..=100`.
    pub fn record_score(&mut self, node_id: &str, score: f64) -> Result<&ProgressEntry, CoreError> {
        // Loaded entries are not range-checked; bring the old best onto the scale.
        let previous_best = self
            .entry(node_id)
            .map(ProgressEntry::effective_score)
            .filter(|best| !best.is_nan())
            .map_or(0.0, |best| best.clamp(0.0, MAX_SCORE));
        let updated = ProgressEntry::new(node_id, score, score.max(previous_best))?;
        let slot = self.entries.entry(node_id.to_string()).or_default();
        *slot = updated;
        Ok(slot)
    }

    /// Tier counts over every node of `tree`.
    #[must_use]
    pub fn summary(&self, tree: &KnowledgeNode) -> MasterySummary {
        let mut summary = MasterySummary::default();
        for (_, node) in traverse::preorder(tree) {
            summary.record(self.status_of(&node.id));
        }
        summary
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
