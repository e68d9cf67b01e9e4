//! Configuration module
//!
//! Handles loading and saving safe-area configuration.

mod overrides;

pub use overrides::{InsetOverride, InsetOverrideConfig};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::model::{InsetKey, Platform, ScreenDimensions};

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Screen settings
    #[serde(default)]
    pub screen: ScreenConfig,

    /// Inset overrides applied to every resolved view
    #[serde(default)]
    pub insets: InsetOverrideConfig,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Enable verbose logging
    #[serde(default)]
    pub verbose: bool,
    /// Log filter directive, e.g. "safearea=debug"
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            log_filter: default_log_filter(),
        }
    }
}

/// Screen configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Window width override
    pub width: Option<f64>,
    /// Window height override
    pub height: Option<f64>,
    /// Platform override
    #[serde(default = "default_platform")]
    pub platform: Platform,
}

fn default_platform() -> Platform {
    Platform::Ios
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            platform: default_platform(),
        }
    }
}

impl ScreenConfig {
    /// Configured dimensions, filling unset sides from `fallback`
    pub fn dimensions_or(&self, fallback: ScreenDimensions) -> ScreenDimensions {
        ScreenDimensions::new(
            self.width.unwrap_or(fallback.width),
            self.height.unwrap_or(fallback.height),
        )
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from the default location
    pub fn load_default() -> ConfigResult<Self> {
        let candidates: Vec<PathBuf> = Self::default_paths().into_iter().flatten().collect();
        Self::load_first(&candidates)
    }

    /// Load the first existing file among `paths`, or the defaults if none exists
    pub fn load_first(paths: &[PathBuf]) -> ConfigResult<Self> {
        for path in paths {
            if path.exists() {
                tracing::debug!("Loading configuration from {}", path.display());
                return Self::load(path);
            }
        }

        // Return default config if no file found
        Ok(Self::default())
    }

    /// Candidate config locations, most specific first
    pub fn default_paths() -> [Option<PathBuf>; 2] {
        [
            dirs::config_dir().map(|p| p.join("safearea/config.toml")),
            Some(PathBuf::from("./safearea.toml")),
        ]
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let contents = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Log filter to use, taking the verbose flag into account
    pub fn log_filter(&self) -> &str {
        if self.general.verbose {
            "debug"
        } else {
            &self.general.log_filter
        }
    }
}

/// Generate a sample configuration file
pub fn generate_sample_config() -> ConfigResult<String> {
    let config = Config {
        screen: ScreenConfig {
            width: Some(375.0),
            height: Some(812.0),
            platform: Platform::Ios,
        },
        insets: InsetOverrideConfig::new()
            .with(InsetKey::Bottom, InsetOverride::Never)
            .with(InsetKey::Horizontal, InsetOverride::Always),
        ..Default::default()
    };

    Ok(toml::to_string_pretty(&config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.screen.platform, Platform::Ios);
        assert!(config.insets.is_empty());
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_save_and_load() {
        let mut config = Config::default();
        config.insets.set(InsetKey::Top, InsetOverride::Value(12.0));
        let file = NamedTempFile::new().unwrap();

        config.save(file.path()).unwrap();

        let loaded = Config::load(file.path()).unwrap();
        assert_eq!(loaded.insets, config.insets);
        assert_eq!(loaded.screen.platform, Platform::Ios);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_first_existing_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent.toml");
        let present = dir.path().join("safearea.toml");
        std::fs::write(&present, "[insets]\ntop = \"never\"\n").unwrap();

        let config = tokio_test::assert_ok!(Config::load_first(&[absent.clone(), present]));
        assert_eq!(config.insets.top, Some(InsetOverride::Never));

        let config = tokio_test::assert_ok!(Config::load_first(&[absent]));
        assert!(config.insets.is_empty());
    }

    #[test]
    fn test_load_first_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("safearea.toml");
        std::fs::write(&broken, "[insets]\ntop = \"sometimes\"\n").unwrap();

        let result = Config::load_first(&[broken]);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_sample_config() {
        let sample = generate_sample_config().unwrap();
        let parsed: Config = toml::from_str(&sample).unwrap();
        assert_eq!(parsed.screen.width, Some(375.0));
        assert_eq!(parsed.insets.bottom, Some(InsetOverride::Never));
        assert_eq!(parsed.insets.horizontal, Some(InsetOverride::Always));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [screen]
            platform = "android"

            [insets]
            vertical = "never"
            "#,
        )
        .unwrap();

        assert_eq!(config.screen.platform, Platform::Android);
        assert_eq!(config.screen.width, None);
        assert_eq!(config.general.log_filter, "info");
        assert_eq!(config.insets.vertical, Some(InsetOverride::Never));
    }

    #[test]
    fn test_screen_dimension_fallback() {
        let screen = ScreenConfig {
            width: Some(812.0),
            ..Default::default()
        };
        let dims = screen.dimensions_or(ScreenDimensions::new(375.0, 375.0));
        assert_eq!(dims, ScreenDimensions::new(812.0, 375.0));
    }

    #[test]
    fn test_verbose_overrides_filter() {
        let mut config = Config::default();
        config.general.verbose = true;
        assert_eq!(config.log_filter(), "debug");
    }
}
