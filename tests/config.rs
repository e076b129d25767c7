//! Tests for runtime configuration defaults and overrides.

use swiss_tournament::config::{AppConfig, DATABASE_ENV};

#[test]
fn defaults_point_at_local_database() {
    let config = AppConfig::default();
    assert_eq!(config.database_path, "tournament.db");
}

#[test]
fn command_line_path_overrides_configured_path() {
    let config = AppConfig::default().with_database_override(Some("league.db".into()));
    assert_eq!(config.database_path, "league.db");

    let unchanged = AppConfig::default().with_database_override(None);
    assert_eq!(unchanged, AppConfig::default());
}

#[test]
fn environment_sets_database_and_command_line_still_wins() {
    std::env::set_var(DATABASE_ENV, "from-env.db");
    let config = AppConfig::from_env();
    assert_eq!(config.database_path, "from-env.db");

    let config = config.with_database_override(Some("from-cli.db".into()));
    assert_eq!(config.database_path, "from-cli.db");

    std::env::remove_var(DATABASE_ENV);
    assert_eq!(AppConfig::from_env(), AppConfig::default());
}
