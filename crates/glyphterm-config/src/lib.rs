//! # glyphterm configuration
//!
//! Defaults for banner styling and console font settings.
//!
//! Configuration sources (in priority order):
//! 1. CLI arguments (applied by the binary)
//! 2. Environment variables (`GLYPHTERM_BANNER__BOLD=true`)
//! 3. User config (`<config dir>/glyphterm/config.toml`)
//! 4. Built-in defaults

use anyhow::Context;
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use glyphterm_core::{Color, StyleSpec, UnsupportedPolicy};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Environment variable prefix; `__` separates nested keys
pub const ENV_PREFIX: &str = "GLYPHTERM_";

/// Get the configuration directory
pub fn config_dir() -> PathBuf {
    ProjectDirs::from("dev", "glyphterm", "glyphterm")
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config/glyphterm"))
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Banner rendering defaults
    pub banner: BannerConfig,
    /// Console font applied by `glyphterm font apply`
    pub console_font: ConsoleFontConfig,
}

/// Banner rendering defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    /// Foreground color, e.g. `"green"` or `"bright_cyan"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Bold banner rows
    pub bold: bool,
    /// `"degrade"` or `"strict"`
    pub unsupported: UnsupportedPolicy,
}

impl BannerConfig {
    pub fn style(&self) -> StyleSpec {
        StyleSpec::banner(self.color, self.bold)
    }
}

/// Console font settings; unset fields are left alone
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleFontConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_name: Option<String>,
    /// Character cell height in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
}

impl ConsoleFontConfig {
    pub fn is_empty(&self) -> bool {
        self.face_name.is_none() && self.size.is_none() && self.bold.is_none()
    }
}

/// Configuration manager
pub struct ConfigManager {
    config: Arc<RwLock<Config>>,
    config_path: PathBuf,
}

impl ConfigManager {
    /// Load from the default location
    pub fn new() -> anyhow::Result<Self> {
        Self::from_path(config_dir().join("config.toml"))
    }

    /// Load from `path`; a missing file yields defaults plus environment
    pub fn from_path(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let config_path = path.into();
        let config = Self::load_from_file(&config_path)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_path,
        })
    }

    /// Load configuration from file
    fn load_from_file(path: &Path) -> anyhow::Result<Config> {
        tracing::debug!(path = %path.display(), exists = path.exists(), "Loading configuration");

        let figment = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment
            .extract()
            .with_context(|| format!("invalid configuration in {}", path.display()))
    }

    /// Get current configuration
    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    /// Update configuration
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut Config),
    {
        let mut config = self.config.write();
        f(&mut config);
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        let config = self.config.read();
        let content = toml::to_string_pretty(&*config)?;

        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.config_path, content)
            .with_context(|| format!("failed to write {}", self.config_path.display()))?;
        tracing::info!(path = %self.config_path.display(), "Configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.banner.color, None);
        assert!(!config.banner.bold);
        assert_eq!(config.banner.unsupported, UnsupportedPolicy::Degrade);
        assert!(config.console_font.is_empty());
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.banner.color = Some(Color::BrightCyan);
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("[banner]"));
        assert!(toml.contains("color = \"bright_cyan\""));
        assert!(toml.contains("unsupported = \"degrade\""));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[banner]
color = "green"
bold = true
unsupported = "strict"

[console_font]
face_name = "Consolas"
size = 20
"#,
        )
        .unwrap();

        let manager = ConfigManager::from_path(&path).unwrap();
        let config = manager.config();
        assert_eq!(config.banner.color, Some(Color::Green));
        assert!(config.banner.bold);
        assert_eq!(config.banner.unsupported, UnsupportedPolicy::Strict);
        assert_eq!(config.console_font.face_name.as_deref(), Some("Consolas"));
        assert_eq!(config.console_font.size, Some(20));
        assert_eq!(config.console_font.bold, None);
        assert_eq!(config.banner.style().prefix(), "\x1b[1m\x1b[32m");
    }

    #[test]
    fn test_invalid_color_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[banner]\ncolor = \"mauve\"\n").unwrap();

        let err = ConfigManager::from_path(&path).err().unwrap();
        assert!(err.to_string().contains("invalid configuration"));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let manager = ConfigManager::from_path(&path).unwrap();
        manager.update(|config| {
            config.banner.color = Some(Color::Magenta);
            config.console_font.bold = Some(true);
        });
        manager.save().unwrap();
        assert!(path.exists());

        let reloaded = ConfigManager::from_path(&path).unwrap();
        assert_eq!(reloaded.config(), manager.config());
        assert_eq!(reloaded.path(), path.as_path());
    }
}
