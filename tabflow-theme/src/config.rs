//! Theme configuration.
//!
//! The default theme can be chosen programmatically, loaded from a TOML
//! configuration file, or overridden through the `TABFLOW_THEME` environment
//! variable (`light` or `dark`). Transition durations for the animated tab
//! overlays can be overridden from the same file, so applications can tune
//! motion without recompiling.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::theme::{DarkTheme, LightTheme, Theme};

/// The environment variable consulted for a theme override.
pub const THEME_ENV_VAR: &str = "TABFLOW_THEME";

/// The built-in theme to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// The built-in light theme.
    Light,
    /// The built-in dark theme.
    Dark,
}

impl Default for ThemeVariant {
    fn default() -> Self {
        Self::Light
    }
}

/// Theme configuration, typically loaded from a TOML file.
///
/// ```toml
/// variant = "dark"
/// overlay-transition-ms = 150
/// panel-transition-ms = 300
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ThemeConfig {
    /// The configured theme variant.
    pub variant: ThemeVariant,
    /// Override for the hover/indicator transition duration, in milliseconds.
    pub overlay_transition_ms: Option<u64>,
    /// Override for the panel swap transition duration, in milliseconds.
    pub panel_transition_ms: Option<u64>,
}

/// Errors arising while loading a theme configuration.
#[derive(Debug, Error)]
pub enum ThemeConfigError {
    /// The configuration file could not be read.
    #[error("failed to read theme config: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file is not valid TOML for [ThemeConfig].
    #[error("failed to parse theme config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ThemeConfig {
    /// Create a configuration with the given variant and no overrides.
    pub fn new(variant: ThemeVariant) -> Self {
        Self {
            variant,
            ..Default::default()
        }
    }

    /// Load a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ThemeConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Read a variant override from the environment, if one is set.
    ///
    /// Unknown values are ignored with a warning rather than failing, since
    /// a typo in a user's shell profile should not take the application down.
    pub fn env_override() -> Option<ThemeVariant> {
        let value = std::env::var(THEME_ENV_VAR).ok()?;
        match value.to_ascii_lowercase().as_str() {
            "light" => Some(ThemeVariant::Light),
            "dark" => Some(ThemeVariant::Dark),
            other => {
                log::warn!("ignoring unknown {THEME_ENV_VAR} value {other:?}");
                None
            }
        }
    }

    /// Resolve the effective theme: the environment override wins over the
    /// configured variant.
    pub fn resolve(&self) -> Box<dyn Theme> {
        let variant = Self::env_override().unwrap_or(self.variant);
        match variant {
            ThemeVariant::Light => Box::new(LightTheme::new()),
            ThemeVariant::Dark => Box::new(DarkTheme::new()),
        }
    }
}
