//! Mind-map rendering configuration.

pub use mentor_core::entities::DEFAULT_HIGHLIGHT_COLOR;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_highlight_color() -> String {
    DEFAULT_HIGHLIGHT_COLOR.to_string()
}

const fn default_ring_spacing() -> f64 {
    260.0
}

const fn default_expand_depth() -> usize {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MindmapConfig {
    /// Color given to insight nodes without an explicit color.
    #[serde(default = "default_highlight_color")]
    pub highlight_color: String,

    /// Distance between concentric rings of the radial canvas, in pixels.
    #[serde(default = "default_ring_spacing")]
    pub ring_spacing: f64,

    /// Depth down to which nodes start expanded (root is depth 0).
    #[serde(default = "default_expand_depth")]
    pub expand_depth: usize,
}

impl Default for MindmapConfig {
    fn default() -> Self {
        Self {
            highlight_color: default_highlight_color(),
            ring_spacing: default_ring_spacing(),
            expand_depth: default_expand_depth(),
        }
    }
}

impl MindmapConfig {
    /// Reject values the layout cannot use.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a non-positive ring spacing or
    /// an empty highlight color.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.ring_spacing.is_finite() && self.ring_spacing > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "mindmap.ring_spacing".into(),
                reason: format!("must be a positive number, got {}", self.ring_spacing),
            });
        }
        if self.highlight_color.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "mindmap.highlight_color".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}
