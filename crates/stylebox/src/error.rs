//! Error types for the fallible edges of the crate.
//!
//! Rendering itself never fails. Only strict color parsing and loading a
//! [`RenderConfig`](crate::RenderConfig) can produce errors.

use thiserror::Error;

/// Error parsing a color string strictly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color string is empty")]
    Empty,
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),
    #[error("ANSI color must be 0-255, got {0}")]
    AnsiOutOfRange(String),
    #[error("invalid color '{0}'")]
    Invalid(String),
}

/// Error loading or saving a render configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[cfg(feature = "yaml")]
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
