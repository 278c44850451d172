//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/fluentbuild/fluentbuild.toml`
//! 3. Local config: `<project_dir>/.fluentbuild.toml`
//! 4. Environment variables: `FLUENTBUILD_*` prefix

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// How built products are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Display text (markup for element trees)
    #[default]
    Text,
    /// TOML document of the product's fields
    Toml,
}

impl std::str::FromStr for OutputFormat {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "toml" => Ok(Self::Toml),
            other => Err(ApplicationError::Config {
                message: format!("unknown format: {other} (expected text or toml)"),
            }),
        }
    }
}

/// Unified configuration for fluentbuild.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Output format for built products (default: text)
    pub format: OutputFormat,
    /// Show element trees as an outline instead of markup
    pub tree_view: bool,
    /// Demonstrations run by `fluentbuild demo` without arguments
    pub demos: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            tree_view: false,
            demos: vec!["employee".into(), "markup".into(), "person".into()],
        }
    }
}

/// Raw settings for intermediate parsing (fields are Option to detect "not specified").
///
/// Used during layered config merging to distinguish between:
/// - `None` → field not specified, inherit from base
/// - `Some([])` → explicit empty array
/// - `Some([...])` → explicit values to merge
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub format: Option<OutputFormat>,
    pub tree_view: Option<bool>,
    pub demos: Option<Vec<String>>,
}

/// Get the XDG config directory for fluentbuild.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "fluentbuild").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("fluentbuild.toml"))
}

/// Get the path to the local config file in a project directory.
pub fn local_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".fluentbuild.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Merge arrays with union semantics and negation support.
    ///
    /// - Items from overlay are added to base
    /// - Items prefixed with `!` remove the corresponding item from the result
    /// - Duplicates are de-duplicated
    ///
    /// # Examples
    /// ```ignore
    /// merge_array(&["a", "b"], &["c"])       // → ["a", "b", "c"]
    /// merge_array(&["a", "b"], &["!a", "c"]) // → ["b", "c"]
    /// ```
    pub fn merge_array(base: &[String], overlay: &[String]) -> Vec<String> {
        let mut result: HashSet<String> = base.iter().cloned().collect();

        for pattern in overlay {
            if let Some(negated) = pattern.strip_prefix('!') {
                result.remove(negated);
            } else {
                result.insert(pattern.clone());
            }
        }

        // Sorted for deterministic output
        let mut vec: Vec<String> = result.into_iter().collect();
        vec.sort();
        vec
    }

    /// Merge overlay config onto self (base) with union semantics for arrays.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            format: overlay.format.unwrap_or(self.format),
            tree_view: overlay.tree_view.unwrap_or(self.tree_view),
            demos: overlay
                .demos
                .as_ref()
                .map(|o| Self::merge_array(&self.demos, o))
                .unwrap_or_else(|| self.demos.clone()),
        }
    }

    /// Apply global config onto defaults with REPLACE semantics for arrays.
    fn apply_global(&self, global: &RawSettings) -> Self {
        Self {
            format: global.format.unwrap_or(self.format),
            tree_view: global.tree_view.unwrap_or(self.tree_view),
            demos: global.demos.clone().unwrap_or_else(|| self.demos.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `project_dir` - Optional project directory holding `.fluentbuild.toml`
    ///
    /// # Array Merge Semantics
    /// - Defaults → Global: REPLACE
    /// - Global → Local: UNION with negation support
    /// - Any → Env vars: REPLACE
    pub fn load(project_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_layers(global_config_path().as_deref(), project_dir)
    }

    /// Same as [`Settings::load`] with an explicit global config file.
    pub fn load_layers(
        global_path: Option<&Path>,
        project_dir: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config (REPLACES defaults)
        if let Some(global_path) = global_path {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                let raw = load_raw_settings(global_path)?;
                current = current.apply_global(&raw);
            }
        }

        // 3. Project-local config (UNION with global)
        if let Some(dir) = project_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("load: local config {}", local_path.display());
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 4. Environment variables (REPLACE)
        Self::apply_env_overrides(current)
    }

    /// Apply FLUENTBUILD_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("FLUENTBUILD")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("demos")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("format") {
            settings.format = val.parse()?;
        }
        if let Ok(val) = config.get_bool("tree_view") {
            settings.tree_view = val;
        }
        if let Ok(val) = config.get::<Vec<String>>("demos") {
            settings.demos = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# fluentbuild configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/fluentbuild/fluentbuild.toml  (defines your baseline)
#   Local:  <project_dir>/.fluentbuild.toml         (project-specific additions)
#   Env:    FLUENTBUILD_* environment variables     (explicit overrides)
#
# Array Merge Semantics:
#   Global config REPLACES compiled defaults.
#   Local config UNIONS with global.
#   Use "!item" in local config to REMOVE an inherited item:
#     demos = ["!markup"]  # keeps the other demos, drops markup

# Output format for built products: "text" or "toml"
# format = "text"

# Show element trees as an outline instead of markup
# tree_view = false

# Demonstrations run by `fluentbuild demo`
# demos = ["employee", "markup", "person"]
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_created_then_runs_every_demo_as_text() {
        let settings = Settings::default();
        assert_eq!(settings.format, OutputFormat::Text);
        assert!(!settings.tree_view);
        assert_eq!(settings.demos, vec!["employee", "markup", "person"]);
    }

    #[test]
    fn given_overlay_with_negation_when_merging_arrays_then_removes_item() {
        let base = vec!["employee".to_string(), "markup".to_string()];
        let overlay = vec!["!markup".to_string(), "person".to_string()];
        assert_eq!(
            Settings::merge_array(&base, &overlay),
            vec!["employee", "person"]
        );
    }

    #[test]
    fn given_global_demos_when_applying_then_replaces_defaults() {
        let raw = RawSettings {
            demos: Some(vec!["person".into()]),
            ..RawSettings::default()
        };
        let settings = Settings::default().apply_global(&raw);
        assert_eq!(settings.demos, vec!["person"]);
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn given_template_when_parsed_then_is_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).expect("parse template");
        assert!(raw.demos.is_none());
    }

    #[test]
    fn given_format_names_when_parsing_then_accepts_known_only() {
        assert_eq!("TOML".parse::<OutputFormat>().unwrap(), OutputFormat::Toml);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
