//! # mentor-config
//!
//! Layered configuration loading for MathMentor using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MENTOR_*` prefix, `__` as separator)
//! 2. Project-level `.mathmentor/config.toml`
//! 3. User-level `~/.config/mathmentor/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MENTOR_STORE__DIR` -> `store.dir`,
//! `MENTOR_MINDMAP__RING_SPACING` -> `mindmap.ring_spacing`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use mentor_config::MentorConfig;
//!
//! let config = MentorConfig::load_with_dotenv().expect("config");
//! println!("insights live in {}", config.store.resolved_dir().display());
//! ```

mod error;
mod general;
mod mindmap;
mod store;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use mindmap::{DEFAULT_HIGHLIGHT_COLOR, MindmapConfig};
pub use store::{DEFAULT_INSIGHT_KEY, StoreConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".mathmentor/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MentorConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub mindmap: MindmapConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl MentorConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` when a source fails to parse and
    /// `ConfigError::InvalidValue` when a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.mindmap.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("MENTOR_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mathmentor").join("config.toml"))
    }
}
