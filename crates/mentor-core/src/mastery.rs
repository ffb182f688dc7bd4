//! Three-tier mastery policy.
//!
//! Every surface that colors or labels a node by mastery (radial canvas,
//! learning path outline, node detail card, summaries) derives the tier
//! through [`MasteryStatus::from_entry`]. The thresholds live only here.

use crate::entities::ProgressEntry;
use crate::enums::MasteryStatus;

/// Lowest effective score that counts as mastered.
pub const MASTERED_THRESHOLD: f64 = 80.0;

/// Upper bound of the score scale.
pub const MAX_SCORE: f64 = 100.0;

impl MasteryStatus {
    /// Derive the tier from a raw score.
    ///
    /// Out-of-range scores are clamped to `0..=100`; `None` and NaN mean the
    /// node was never attempted.
    #[must_use]
    pub fn from_score(score: Option<f64>) -> Self {
        let Some(score) = score.filter(|s| !s.is_nan()) else {
            return Self::NotStarted;
        };
        let score = score.clamp(0.0, MAX_SCORE);
        if score >= MASTERED_THRESHOLD {
            Self::Mastered
        } else if score > 0.0 {
            Self::Learning
        } else {
            Self::NotStarted
        }
    }

    /// Derive the tier from an optional progress entry, using its effective score.
    #[must_use]
    pub fn from_entry(entry: Option<&ProgressEntry>) -> Self {
        Self::from_score(entry.map(ProgressEntry::effective_score))
    }
}
