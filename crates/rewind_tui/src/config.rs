//! TOML configuration for the terminal UI.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "rewind.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Board appearance.
    display: DisplayConfig,
    /// Log output.
    logging: LoggingConfig,
}

/// Board appearance settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show 1-based numbers on empty squares.
    #[getter(skip)]
    show_hints: bool,
    /// Colour of X marks (name or `#rrggbb`).
    x_color: String,
    /// Colour of O marks (name or `#rrggbb`).
    o_color: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_hints: true,
            x_color: "blue".to_string(),
            o_color: "red".to_string(),
        }
    }
}

impl DisplayConfig {
    /// Whether empty squares show their 1-based number.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// Parsed colour of X marks.
    pub fn x(&self) -> Result<Color, ConfigError> {
        parse_color("display.x_color", &self.x_color)
    }

    /// Parsed colour of O marks.
    pub fn o(&self) -> Result<Color, ConfigError> {
        parse_color("display.o_color", &self.o_color)
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    filter: String,
    /// File receiving log lines. Logs are discarded when unset, since the
    /// UI owns the terminal.
    file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Loads configuration.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read if present and defaults are used otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.display.x()?;
        config.display.o()?;
        Ok(config)
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::new(format!("Invalid colour for {}: {:?}", key, value)))
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.display().show_hints());
        assert_eq!(config.display().x().unwrap(), Color::Blue);
        assert_eq!(config.display().o().unwrap(), Color::Red);
        assert_eq!(config.logging().filter(), "info");
        assert_eq!(config.logging().file(), &None);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml("[display]\nshow_hints = false\n").unwrap();
        assert!(!config.display().show_hints());
        assert_eq!(config.display().x_color(), "blue");
        assert_eq!(config.logging().filter(), "info");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[display]\nx_color = \"#00ff00\"\n\n[logging]\nfilter = \"rewind=debug\"\nfile = \"rewind.log\""
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.display().x().unwrap(), Color::Rgb(0, 255, 0));
        assert_eq!(config.logging().filter(), "rewind=debug");
        assert_eq!(config.logging().file(), &Some(PathBuf::from("rewind.log")));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_colour_rejected() {
        let err = Config::from_toml("[display]\no_color = \"not-a-colour\"\n").unwrap_err();
        assert!(err.message.contains("display.o_color"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = Config::from_toml("[display\n").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}
