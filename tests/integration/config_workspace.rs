use anyhow::Result;
use ssmlbase::config::{
    config_file_path, load_or_default, save, workspace_root, AppConfig, HOME_ENV,
};
use std::env;

use crate::IntegrationHarness;

// The only test that touches the workspace environment variable.
#[test]
fn config_round_trips_through_workspace_home() -> Result<()> {
    let harness = IntegrationHarness::new();
    env::set_var(HOME_ENV, harness.workspace_path());
    assert_eq!(workspace_root()?, harness.workspace_path());

    assert_eq!(load_or_default()?, AppConfig::default());

    let mut config = AppConfig::default();
    config.debug = true;
    config.intent_log.file_name = "debug.jsonl".into();
    save(&config)?;
    assert!(config_file_path()?.exists());

    let loaded = load_or_default()?;
    assert_eq!(loaded, config);
    assert_eq!(
        loaded.intent_log_path()?,
        harness.workspace_path().join("logs").join("debug.jsonl")
    );
    env::remove_var(HOME_ENV);
    Ok(())
}
