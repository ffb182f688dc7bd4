use figment::Jail;
use mentor_config::MentorConfig;

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("MENTOR_MINDMAP__EXPAND_DEPTH", "4");
        jail.set_env("MENTOR_STORE__KEY", "custom.key");

        let config = MentorConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.mindmap.expand_depth, 4);
        assert_eq!(config.store.key, "custom.key");
        Ok(())
    });
}

#[test]
fn unrelated_env_vars_are_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("ZENITH_STORE__KEY", "not-ours");

        let config = MentorConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.store.key, "mathmentor.insights.v1");
        Ok(())
    });
}
