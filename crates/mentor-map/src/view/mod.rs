//! Presentation adapters over a merged tree and a progress overlay.
//!
//! Each surface takes its mastery tier from [`MasteryStatus::from_entry`]
//! through [`ProgressOverlay::status_of`], so the thresholds cannot drift.
//!
//! [`MasteryStatus::from_entry`]: mentor_core::enums::MasteryStatus::from_entry
//! [`ProgressOverlay::status_of`]: crate::ProgressOverlay::status_of

pub mod detail;
pub mod outline;
pub mod radial;

use std::collections::HashMap;

use mentor_core::mastery::MAX_SCORE;

pub use detail::{NodeDetail, node_detail};
pub use outline::{OutlineRow, outline};
pub use radial::{Edge, PlacedNode, Point, RadialLayout, radial_layout};

/// Which nodes show their children.
///
/// A depth rule applies first (`None` expands everything); per-node
/// overrides from clicks win over it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    depth: Option<usize>,
    overrides: HashMap<String, bool>,
}

impl Expansion {
    /// Every node expanded.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Nodes shallower than `depth` expanded; `to_depth(0)` shows only the root.
    #[must_use]
    pub fn to_depth(depth: usize) -> Self {
        Self {
            depth: Some(depth),
            overrides: HashMap::new(),
        }
    }

    #[must_use]
    pub fn collapse(mut self, id: impl Into<String>) -> Self {
        self.overrides.insert(id.into(), false);
        self
    }

    #[must_use]
    pub fn expand(mut self, id: impl Into<String>) -> Self {
        self.overrides.insert(id.into(), true);
        self
    }

    /// Flip a node's state as a click on its +/- button would.
    pub fn toggle(&mut self, id: &str, depth: usize) {
        let next = !self.is_expanded(id, depth);
        self.overrides.insert(id.to_string(), next);
    }

    #[must_use]
    pub fn is_expanded(&self, id: &str, depth: usize) -> bool {
        self.overrides
            .get(id)
            .copied()
            .unwrap_or_else(|| self.depth.is_none_or(|limit| depth < limit))
    }
}

/// Percentage text for a score, or `None` when the node has no positive score.
///
/// Truncates rather than rounds, so the text never reaches 80% while the
/// tier is still learning, and a tiny positive score reads `<1%`.
#[must_use]
pub fn score_percent(score: Option<f64>) -> Option<String> {
    let score = score.filter(|s| *s > 0.0)?.min(MAX_SCORE);
    if score < 1.0 {
        return Some("<1%".to_string());
    }
    Some(format!("{:.0}%", score.floor()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_percent_agrees_with_tier() {
        assert_eq!(score_percent(None), None);
        assert_eq!(score_percent(Some(0.0)), None);
        assert_eq!(score_percent(Some(f64::NAN)), None);
        assert_eq!(score_percent(Some(0.4)).as_deref(), Some("<1%"));
        assert_eq!(score_percent(Some(79.6)).as_deref(), Some("79%"));
        assert_eq!(score_percent(Some(80.0)).as_deref(), Some("80%"));
        assert_eq!(score_percent(Some(120.0)).as_deref(), Some("100%"));
    }

    #[test]
    fn depth_rule() {
        let expansion = Expansion::to_depth(1);
        assert!(expansion.is_expanded("root", 0));
        assert!(!expansion.is_expanded("child", 1));
    }

    #[test]
    fn overrides_beat_depth_rule() {
        let expansion = Expansion::to_depth(1).expand("child").collapse("root");
        assert!(!expansion.is_expanded("root", 0));
        assert!(expansion.is_expanded("child", 1));
    }

    #[test]
    fn toggle_flips_state() {
        let mut expansion = Expansion::all();
        expansion.toggle("a", 3);
        assert!(!expansion.is_expanded("a", 3));
        expansion.toggle("a", 3);
        assert!(expansion.is_expanded("a", 3));
    }
}
