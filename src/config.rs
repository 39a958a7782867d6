//! Configuration
//!
//! Settings come from a TOML file and are then overridden by command-line
//! flags. A missing file is not an error; defaults are used instead.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::canvas::{ByteColor, ColorParser};
use crate::errors::SessionError;

/// Prompt printed before each command in interactive mode
pub const DEFAULT_PROMPT: &str = "enter command: ";

/// REPL configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Background color of new canvases (one printable character)
    pub background: String,

    /// Foreground color used by lines and rectangles
    pub foreground: String,

    /// Prompt shown when reading from a terminal
    pub prompt: String,

    /// Echo each command read from a script before running it
    pub echo: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            background: " ".to_string(),
            foreground: "x".to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            echo: false,
        }
    }
}

impl Config {
    /// Platform configuration directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "textcanvas", "textcanvas")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Default configuration file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Background as a color value; empty falls back to `colors`' default
    pub fn background_color(&self, colors: &ColorParser) -> Result<ByteColor, SessionError> {
        parse_color(colors, "background", &self.background)
    }

    /// Foreground as a color value; empty falls back to `colors`' default
    pub fn foreground_color(&self, colors: &ColorParser) -> Result<ByteColor, SessionError> {
        parse_color(colors, "foreground", &self.foreground)
    }
}

fn parse_color(colors: &ColorParser, field: &str, value: &str) -> Result<ByteColor, SessionError> {
    colors
        .parse(value)
        .map_err(|e| SessionError::Config(format!("Invalid {field} color: {e}")))
}

/// Load configuration from `path`, or from the default location
///
/// An explicit path must exist; the default location may be absent.
pub fn load_config(path: Option<&Path>) -> Result<Config, SessionError> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => match Config::config_path() {
            Some(p) => (p, false),
            None => return Ok(Config::default()),
        },
    };

    if !path.exists() {
        if required {
            return Err(SessionError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        tracing::debug!("No config file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| SessionError::Config(format!("Failed to read config: {e}")))?;
    let config: Config = toml::from_str(&content)
        .map_err(|e| SessionError::Config(format!("Invalid TOML config: {e}")))?;

    // Reject bad colors at load time rather than at the first `C` command.
    let colors = ColorParser::default();
    config.background_color(&colors)?;
    config.foreground_color(&colors)?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}
