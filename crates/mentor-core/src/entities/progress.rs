use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::CoreError;

/// Learner progress on one node, as reported by the backend.
///
/// `node_id` defaults to empty so the id-keyed map form
/// (`{"cuc-tri": {"score": 40}}`) deserializes; the loader fills it from the key.
/// Backend rows use snake_case names and may carry a `null` score.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    #[serde(default, alias = "node_id")]
    pub node_id: String,
    #[serde(default, deserialize_with = "null_as_zero")]
    #[schemars(with = "f64")]
    pub score: f64,
    #[serde(default, alias = "max_score", deserialize_with = "null_as_zero")]
    #[schemars(with = "f64")]
    pub max_score: f64,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

impl ProgressEntry {
    /// Build a validated entry.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if either score is NaN or outside `0..=100`.
    pub fn new(node_id: impl Into<String>, score: f64, max_score: f64) -> Result<Self, CoreError> {
        for (field, value) in [("score", score), ("maxScore", max_score)] {
            if !(0.0..=100.0).contains(&value) {
                return Err(CoreError::Validation(format!(
                    "{field} must be within 0..=100, got {value}"
                )));
            }
        }
        Ok(Self {
            node_id: node_id.into(),
            score,
            max_score,
        })
    }

    /// The best score ever recorded for the node.
    #[must_use]
    pub fn effective_score(&self) -> f64 {
        self.score.max(self.max_score)
    }
}
