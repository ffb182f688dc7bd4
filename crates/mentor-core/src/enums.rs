//! Node kinds and mastery statuses.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// NodeKind
// ---------------------------------------------------------------------------

/// Classification tag of a knowledge node.
///
/// This is a depth hint for rendering, not an enforced hierarchy: a `concept`
/// may sit directly under the root when an insight falls back there.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Topic,
    Subtopic,
    #[default]
    Concept,
}

impl NodeKind {
    /// Return the string representation used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Topic => "topic",
            Self::Subtopic => "subtopic",
            Self::Concept => "concept",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MasteryStatus
// ---------------------------------------------------------------------------

/// Learner state on a node, derived from its progress entry.
///
/// ```text
/// absent / 0  → not_started
/// (0, 80)     → learning
/// [80, 100]   → mastered
/// ```
///
/// See [`crate::mastery`] for the derivation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MasteryStatus {
    #[default]
    NotStarted,
    Learning,
    Mastered,
}

impl MasteryStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Learning => "learning",
            Self::Mastered => "mastered",
        }
    }

    /// Human-readable label shown on cards and outline rows.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not started",
            Self::Learning => "Learning",
            Self::Mastered => "Mastered",
        }
    }

    /// Fill color for nodes in this state.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::NotStarted => "#3b82f6",
            Self::Learning => "#facc15",
            Self::Mastered => "#22c55e",
        }
    }
}

impl fmt::Display for MasteryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
