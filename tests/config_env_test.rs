//! Environment variable overrides for Settings.
//!
//! Kept in its own test binary: it mutates process environment.

use std::env;

use tempfile::TempDir;

use fluentbuild::config::{local_config_path, OutputFormat, Settings};

#[test]
fn given_env_overrides_when_load_then_replace_file_values() {
    // Arrange
    let project = TempDir::new().unwrap();
    std::fs::write(
        local_config_path(project.path()),
        "demos = [\"markup\"]\nformat = \"text\"\n",
    )
    .unwrap();

    env::set_var("FLUENTBUILD_FORMAT", "toml");
    env::set_var("FLUENTBUILD_TREE_VIEW", "true");
    env::set_var("FLUENTBUILD_DEMOS", "person,employee");

    // Act
    let result = Settings::load_layers(None, Some(project.path()));

    env::remove_var("FLUENTBUILD_FORMAT");
    env::remove_var("FLUENTBUILD_TREE_VIEW");
    env::remove_var("FLUENTBUILD_DEMOS");

    // Assert
    let settings = result.expect("load settings");
    assert_eq!(settings.format, OutputFormat::Toml);
    assert!(settings.tree_view);
    assert_eq!(settings.demos, vec!["person", "employee"]);
}
