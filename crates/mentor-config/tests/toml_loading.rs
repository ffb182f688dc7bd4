//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for safe, sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use mentor_config::{ConfigError, MentorConfig};
use pretty_assertions::assert_eq;

fn figment_with_file(path: &str) -> Figment {
    Figment::from(Serialized::defaults(MentorConfig::default())).merge(Toml::file(path))
}

#[test]
fn loads_store_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[store]
dir = "/tmp/mentor-store"
key = "mathmentor.insights.v2"
"#,
        )?;

        let config = MentorConfig::from_figment(figment_with_file("config.toml"))
            .map_err(|e| e.to_string())?;

        assert_eq!(config.store.dir, "/tmp/mentor-store");
        assert_eq!(config.store.key, "mathmentor.insights.v2");
        Ok(())
    });
}

#[test]
fn loads_mindmap_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r##"
[mindmap]
highlight_color = "#ff9800"
ring_spacing = 180.0
expand_depth = 3
"##,
        )?;

        let config = MentorConfig::from_figment(figment_with_file("config.toml"))
            .map_err(|e| e.to_string())?;

        assert_eq!(config.mindmap.highlight_color, "#ff9800");
        assert!((config.mindmap.ring_spacing - 180.0).abs() < f64::EPSILON);
        assert_eq!(config.mindmap.expand_depth, 3);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[mindmap]
expand_depth = 0
"#,
        )?;

        let config = MentorConfig::from_figment(figment_with_file("config.toml"))
            .map_err(|e| e.to_string())?;

        assert_eq!(config.mindmap.expand_depth, 0);
        assert_eq!(config.mindmap.highlight_color, "#fcd34d");
        assert_eq!(config.store.key, "mathmentor.insights.v1");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[store]
dir = "from-toml"
"#,
        )?;
        jail.set_env("MENTOR_STORE__DIR", "from-env");

        let figment =
            figment_with_file("config.toml").merge(Env::prefixed("MENTOR_").split("__"));
        let config = MentorConfig::from_figment(figment).map_err(|e| e.to_string())?;

        assert_eq!(config.store.dir, "from-env");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up_by_default_chain() {
    Jail::expect_with(|jail| {
        jail.create_dir(".mathmentor")?;
        jail.create_file(
            ".mathmentor/config.toml",
            r#"
[general]
default_format = "table"
"#,
        )?;

        let config = MentorConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.general.default_format, "table");
        Ok(())
    });
}

#[test]
fn invalid_ring_spacing_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[mindmap]
ring_spacing = -4.0
"#,
        )?;

        let result = MentorConfig::from_figment(figment_with_file("config.toml"));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[store\ndir = ")?;

        let result = MentorConfig::from_figment(figment_with_file("config.toml"));
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}
