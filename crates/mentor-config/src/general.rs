//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_format() -> String {
    "json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Output format used when `--format` is not given (`json`, `table`, `raw`).
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        assert_eq!(GeneralConfig::default().default_format, "json");
    }
}
