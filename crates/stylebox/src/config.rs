//! Explicit render configuration.
//!
//! There is no global renderer and no environment probing. Whatever color
//! profile and background a caller wants is passed in a [`RenderConfig`],
//! which also acts as the crate's [`ColorResolver`].
//!
//! # Example
//!
//! ```rust
//! use stylebox::{ColorProfile, RenderConfig, Style};
//!
//! let config = RenderConfig::from_toml("color_profile = \"ansi256\"").unwrap();
//! assert_eq!(config.color_profile, ColorProfile::Ansi256);
//!
//! let out = Style::new().foreground("#ff0000").render_with("hi", &config);
//! assert_eq!(out, "\x1b[38;5;196mhi\x1b[0m");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{
    self, Channel, ColorProfile, ColorResolver, ColorValue, ResolvedColor, resolve_color,
};
use crate::error::ConfigError;

/// Configuration threaded through every render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Color depth escape codes are emitted for.
    pub color_profile: ColorProfile,
    /// Selects the dark variant of adaptive colors.
    pub dark_background: bool,
}

impl RenderConfig {
    /// True color on a dark background.
    pub const DEFAULT: RenderConfig = RenderConfig {
        color_profile: ColorProfile::TrueColor,
        dark_background: true,
    };

    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::DEFAULT
    }

    /// Set the color profile.
    pub fn with_color_profile(mut self, profile: ColorProfile) -> Self {
        self.color_profile = profile;
        self
    }

    /// Set the dark background flag.
    pub fn with_dark_background(mut self, dark: bool) -> Self {
        self.dark_background = dark;
        self
    }

    // ==================== Loading ====================

    /// Load a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from TOML.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml)?)
    }

    /// Load a configuration from YAML.
    #[cfg(feature = "yaml")]
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a configuration file, picking the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        debug!(config.path = %path.display(), config.format = %ext, "Loading render config");

        match ext.as_str() {
            "json" => Self::from_json(&content),
            "toml" => Self::from_toml(&content),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Self::from_yaml(&content),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Serialize this configuration to JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize this configuration to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ColorResolver for RenderConfig {
    fn resolve(&self, color: &ColorValue) -> ResolvedColor {
        resolve_color(color, self.dark_background)
    }

    fn to_escape_code(&self, resolved: &ResolvedColor, channel: Channel) -> String {
        color::escape_code(self.color_profile, resolved, channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::AdaptiveColor;

    #[test]
    fn test_config_default() {
        let c = RenderConfig::new();
        assert_eq!(c.color_profile, ColorProfile::TrueColor);
        assert!(c.dark_background);
    }

    #[test]
    fn test_config_builders() {
        let c = RenderConfig::new()
            .with_color_profile(ColorProfile::Ansi256)
            .with_dark_background(false);
        assert_eq!(c.color_profile, ColorProfile::Ansi256);
        assert!(!c.dark_background);
    }

    #[test]
    fn test_config_from_json_partial() {
        let c = RenderConfig::from_json(r#"{"color_profile":"ansi"}"#).expect("parse json");
        assert_eq!(c.color_profile, ColorProfile::Ansi);
        assert!(c.dark_background);
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let c = RenderConfig::new().with_dark_background(false);
        let text = c.to_toml().expect("serialize toml");
        assert_eq!(RenderConfig::from_toml(&text).expect("parse toml"), c);
    }

    #[test]
    fn test_config_rejects_unknown_profile() {
        assert!(RenderConfig::from_toml("color_profile = \"sepia\"").is_err());
    }

    fn temp_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("create temp file");
        std::fs::write(file.path(), content).expect("write temp file");
        file
    }

    #[test]
    fn test_config_from_file_dispatches_on_extension() {
        let file = temp_config(".toml", "color_profile = \"ascii\"\ndark_background = false\n");
        let c = RenderConfig::from_file(file.path()).expect("load toml");
        assert_eq!(c.color_profile, ColorProfile::Ascii);
        assert!(!c.dark_background);

        let file = temp_config(".json", r#"{"dark_background": false}"#);
        let c = RenderConfig::from_file(file.path()).expect("load json");
        assert!(!c.dark_background);
    }

    #[test]
    fn test_config_from_file_unsupported_extension() {
        let file = temp_config(".ini", "x");
        let err = RenderConfig::from_file(file.path()).expect_err("ini is unsupported");
        assert!(matches!(err, ConfigError::UnsupportedFormat(ref e) if e == "ini"));
    }

    #[test]
    fn test_config_from_missing_file_is_io_error() {
        let err = RenderConfig::from_file("/nonexistent/stylebox.toml").expect_err("missing");
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_resolver_uses_background() {
        let adaptive = ColorValue::from(AdaptiveColor::new("#000000", "#ffffff"));
        let light = RenderConfig::new().with_dark_background(false);
        assert_eq!(
            light.escape_code(&adaptive, Channel::Foreground),
            "\x1b[38;2;0;0;0m"
        );
        assert_eq!(
            RenderConfig::new().escape_code(&adaptive, Channel::Foreground),
            "\x1b[38;2;255;255;255m"
        );
    }
}
