//! Insight store configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default storage key. The version suffix changes when the document shape does.
pub const DEFAULT_INSIGHT_KEY: &str = "mathmentor.insights.v1";

fn default_key() -> String {
    DEFAULT_INSIGHT_KEY.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Directory holding one JSON file per storage key.
    /// Empty means `.mathmentor/store` under the current directory.
    #[serde(default)]
    pub dir: String,

    /// Key the insight document is stored under.
    #[serde(default = "default_key")]
    pub key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            key: default_key(),
        }
    }
}

impl StoreConfig {
    /// Resolve the storage directory, falling back to the project-local default.
    #[must_use]
    pub fn resolved_dir(&self) -> PathBuf {
        if self.dir.is_empty() {
            PathBuf::from(".mathmentor").join("store")
        } else {
            PathBuf::from(&self.dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = StoreConfig::default();
        assert!(config.dir.is_empty());
        assert_eq!(config.key, "mathmentor.insights.v1");
        assert_eq!(
            config.resolved_dir(),
            PathBuf::from(".mathmentor/store")
        );
    }

    #[test]
    fn explicit_dir_wins() {
        let config = StoreConfig {
            dir: "/var/lib/mentor".into(),
            ..StoreConfig::default()
        };
        assert_eq!(config.resolved_dir(), PathBuf::from("/var/lib/mentor"));
    }
}
