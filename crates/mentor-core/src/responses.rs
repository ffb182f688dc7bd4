//! CLI response types.
//!
//! Structured output for `mentor` commands. All derive `Serialize`,
//! `Deserialize`, and `JsonSchema` so they can be rendered as JSON or tables
//! and dumped via `mentor schema`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::MasteryStatus;

/// Response for `mentor insight add` and `mentor insight import`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InsightUpsertResponse {
    /// Number of records submitted in this call.
    pub upserted: usize,
    /// Number of records in the store after the upsert.
    pub stored: usize,
    /// Node ids that did not exist before the upsert.
    pub added: Vec<String>,
    /// Node ids whose existing record was replaced.
    pub replaced: Vec<String>,
}

/// Node counts per mastery tier over a tree.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MasterySummary {
    pub total: usize,
    pub not_started: usize,
    pub learning: usize,
    pub mastered: usize,
}

impl MasterySummary {
    /// Count one node in the given tier.
    pub const fn record(&mut self, status: MasteryStatus) {
        self.total += 1;
        match status {
            MasteryStatus::NotStarted => self.not_started += 1,
            MasteryStatus::Learning => self.learning += 1,
            MasteryStatus::Mastered => self.mastered += 1,
        }
    }
}
