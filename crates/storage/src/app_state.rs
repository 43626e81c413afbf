//! Application-level persisted state schema
//!
//! This module defines the top-level structure for all state that survives
//! a process restart: the theme selection and appearance preferences.

use serde::{Deserialize, Serialize};

/// Current schema version for the persisted state file
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Minimum font scale multiplier
pub const MIN_FONT_SCALE: f32 = 0.8;

/// Maximum font scale multiplier
pub const MAX_FONT_SCALE: f32 = 1.4;

/// Color scheme preference
///
/// `System` defers to the scheme reported by the host platform at read
/// time; `Light` and `Dark` pin the scheme explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Follow the platform-reported color scheme
    #[default]
    System,
    /// Always use the light scheme
    Light,
    /// Always use the dark scheme
    Dark,
}

impl ColorScheme {
    /// All selectable values, in presentation order
    pub fn all() -> [ColorScheme; 3] {
        [ColorScheme::Light, ColorScheme::Dark, ColorScheme::System]
    }

    /// Whether this selection defers to the platform
    pub fn is_system(&self) -> bool {
        matches!(self, ColorScheme::System)
    }
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorScheme::System => write!(f, "System"),
            ColorScheme::Light => write!(f, "Light"),
            ColorScheme::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(ColorScheme::System),
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            _ => Err(format!("Unknown color scheme: {}", s)),
        }
    }
}

/// Application-level persisted state
///
/// All fields carry serde defaults so state files written by older builds
/// keep loading after new fields are added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppPersistedState {
    /// Theme selection (light, dark, or system)
    #[serde(default)]
    pub color_scheme: ColorScheme,

    /// Reduce or disable non-essential animations
    #[serde(default)]
    pub reduce_motion: bool,

    /// Font scale multiplier applied to typography
    #[serde(default = "default_font_scale")]
    pub font_scale: f32,
}

fn default_font_scale() -> f32 {
    1.0
}

impl Default for AppPersistedState {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::System,
            reduce_motion: false,
            font_scale: 1.0,
        }
    }
}

impl AppPersistedState {
    /// Set the font scale, clamped to the supported range
    pub fn set_font_scale(&mut self, scale: f32) {
        self.font_scale = scale.clamp(MIN_FONT_SCALE, MAX_FONT_SCALE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_scheme_default() {
        assert_eq!(ColorScheme::default(), ColorScheme::System);
    }

    #[test]
    fn test_color_scheme_display() {
        assert_eq!(ColorScheme::System.to_string(), "System");
        assert_eq!(ColorScheme::Light.to_string(), "Light");
        assert_eq!(ColorScheme::Dark.to_string(), "Dark");
    }

    #[test]
    fn test_color_scheme_from_str() {
        assert_eq!("system".parse::<ColorScheme>().unwrap(), ColorScheme::System);
        assert_eq!("light".parse::<ColorScheme>().unwrap(), ColorScheme::Light);
        assert_eq!("DARK".parse::<ColorScheme>().unwrap(), ColorScheme::Dark);
        assert!("sepia".parse::<ColorScheme>().is_err());
    }

    #[test]
    fn test_color_scheme_serialization() {
        let json = serde_json::to_string(&ColorScheme::Dark).unwrap();
        assert_eq!(json, "\"dark\"");

        let parsed: ColorScheme = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(parsed, ColorScheme::System);
    }

    #[test]
    fn test_color_scheme_all() {
        let all = ColorScheme::all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0], ColorScheme::Light);
        assert_eq!(all[2], ColorScheme::System);
    }

    #[test]
    fn test_persisted_state_default() {
        let state = AppPersistedState::default();
        assert_eq!(state.color_scheme, ColorScheme::System);
        assert!(!state.reduce_motion);
        assert_eq!(state.font_scale, 1.0);
    }

    #[test]
    fn test_persisted_state_font_scale_clamped() {
        let mut state = AppPersistedState::default();

        state.set_font_scale(1.2);
        assert_eq!(state.font_scale, 1.2);

        state.set_font_scale(0.5);
        assert_eq!(state.font_scale, MIN_FONT_SCALE);

        state.set_font_scale(2.0);
        assert_eq!(state.font_scale, MAX_FONT_SCALE);
    }

    #[test]
    fn test_persisted_state_roundtrip() {
        let state = AppPersistedState {
            color_scheme: ColorScheme::Dark,
            reduce_motion: true,
            font_scale: 1.1,
        };

        let json = serde_json::to_string(&state).unwrap();
        let parsed: AppPersistedState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, parsed);
    }

    #[test]
    fn test_persisted_state_missing_fields_use_defaults() {
        // A state file written before newer fields existed
        let parsed: AppPersistedState =
            serde_json::from_str(r#"{"colorScheme":"dark"}"#).unwrap();
        assert_eq!(parsed.color_scheme, ColorScheme::Dark);
        assert!(!parsed.reduce_motion);
        assert_eq!(parsed.font_scale, 1.0);
    }
}
