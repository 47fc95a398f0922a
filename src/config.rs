//! TOML configuration for `docs-index`.
//!
//! Every key is optional. With no configuration file the tool indexes
//! `./docs` and writes `./docs/index.md`.

use anyhow::{bail, Context, Result};
use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file picked up from the working directory when `--config`
/// is not given.
pub const DEFAULT_CONFIG_FILE: &str = "docs-index.toml";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub docs: DocsConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DocsConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// File name of the generated index, written inside `root`.
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub exclude_globs: Vec<String>,
    #[serde(default)]
    pub follow_symlinks: bool,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            output: default_output(),
            extensions: default_extensions(),
            exclude_globs: Vec::new(),
            follow_symlinks: false,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("docs")
}
fn default_output() -> String {
    "index.md".to_string()
}
fn default_extensions() -> Vec<String> {
    vec!["md".to_string(), "html".to_string()]
}

#[derive(Debug, Deserialize, Clone)]
pub struct RenderConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_intro")]
    pub intro: String,
    #[serde(default = "default_empty_notice")]
    pub empty_notice: String,
    #[serde(default = "default_updated_label")]
    pub updated_label: String,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            intro: default_intro(),
            empty_notice: default_empty_notice(),
            updated_label: default_updated_label(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

fn default_title() -> String {
    "Documentation".to_string()
}
fn default_intro() -> String {
    "All documents in this repository.".to_string()
}
fn default_empty_notice() -> String {
    "No documents yet.".to_string()
}
fn default_updated_label() -> String {
    "Last updated".to_string()
}
fn default_timestamp_format() -> String {
    "%Y/%m/%d %H:%M:%S".to_string()
}

impl Config {
    /// Full path of the generated index file.
    pub fn output_path(&self) -> PathBuf {
        self.docs.root.join(&self.docs.output)
    }

    /// Check the invariants the pipeline relies on.
    pub fn validate(&self) -> Result<()> {
        let output = self.docs.output.as_str();
        if output.is_empty() || output.contains('/') || output.contains('\\') {
            bail!(
                "docs.output must be a plain file name, got '{}'",
                self.docs.output
            );
        }

        if self.docs.extensions.is_empty() {
            bail!("docs.extensions must list at least one extension");
        }
        if let Some(bad) = self
            .docs
            .extensions
            .iter()
            .find(|e| e.is_empty() || e.starts_with('.'))
        {
            bail!(
                "docs.extensions entries must be bare extensions like \"md\", got '{}'",
                bad
            );
        }

        for pattern in &self.docs.exclude_globs {
            globset::Glob::new(pattern)
                .with_context(|| format!("Invalid docs.exclude_globs pattern: {}", pattern))?;
        }

        if StrftimeItems::new(&self.render.timestamp_format).any(|i| matches!(i, Item::Error)) {
            bail!(
                "render.timestamp_format is not a valid strftime format: '{}'",
                self.render.timestamp_format
            );
        }

        Ok(())
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    config.validate()?;

    Ok(config)
}

/// Resolve the configuration for a run.
///
/// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] in the
/// working directory is used when present, otherwise the built-in defaults.
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load_config(path),
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_FILE);
            if fallback.is_file() {
                load_config(fallback)
            } else {
                Ok(Config::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.docs.root, PathBuf::from("docs"));
        assert_eq!(config.docs.output, "index.md");
        assert_eq!(config.docs.extensions, vec!["md", "html"]);
        assert_eq!(config.render.timestamp_format, "%Y/%m/%d %H:%M:%S");
        assert!(config.validate().is_ok());
        assert_eq!(config.output_path(), PathBuf::from("docs/index.md"));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str(
            r#"
[docs]
root = "manual"

[render]
title = "Manual"
"#,
        )
        .unwrap();
        assert_eq!(config.docs.root, PathBuf::from("manual"));
        assert_eq!(config.docs.output, "index.md");
        assert_eq!(config.render.title, "Manual");
        assert_eq!(config.render.updated_label, "Last updated");
    }

    #[test]
    fn output_with_separator_is_rejected() {
        let mut config = Config::default();
        config.docs.output = "sub/index.md".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_extension_list_is_rejected() {
        let mut config = Config::default();
        config.docs.extensions.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn dotted_extension_is_rejected() {
        let mut config = Config::default();
        config.docs.extensions = vec![".md".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn bad_glob_is_rejected() {
        let mut config = Config::default();
        config.docs.exclude_globs = vec!["drafts/[".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn bad_timestamp_format_is_rejected() {
        let mut config = Config::default();
        config.render.timestamp_format = "%Y %Q".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_explicit_config_fails() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = resolve_config(Some(&tmp.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
