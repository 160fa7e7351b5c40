//! Application configuration loaded from a TOML file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::nav::dual::Side;
use crate::paths::PathStyle;

/// Top-level configuration.
///
/// All fields have defaults so the browser works without a config file.
/// Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(e, path))?;
        Self::parse(&content)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> CoreResult<Self> {
        toml::from_str(content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }
}

/// Where panels open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Directory both panels open in. Defaults to the working directory.
    #[serde(default)]
    pub start_dir: Option<PathBuf>,
    #[serde(default)]
    pub left_dir: Option<PathBuf>,
    #[serde(default)]
    pub right_dir: Option<PathBuf>,
}

impl GeneralConfig {
    /// The configured directory for `side`, falling back to `start_dir`.
    pub fn dir_for(&self, side: Side) -> Option<&Path> {
        let specific = match side {
            Side::Left => self.left_dir.as_deref(),
            Side::Right => self.right_dir.as_deref(),
        };
        specific.or(self.start_dir.as_deref())
    }
}

/// Which path rules to apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleSetting {
    /// Follow the compiled target.
    #[default]
    Native,
    Posix,
    Drive,
}

/// Path handling settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default)]
    pub style: StyleSetting,
}

impl PathsConfig {
    /// Resolves the configured setting to a concrete [`PathStyle`].
    pub fn style(&self) -> PathStyle {
        match self.style {
            StyleSetting::Native => PathStyle::native(),
            StyleSetting::Posix => PathStyle::Posix,
            StyleSetting::Drive => PathStyle::Drive,
        }
    }
}

/// Log file settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: default_log_file(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("dnav.log")
}

fn default_log_level() -> String {
    "debug".to_string()
}
