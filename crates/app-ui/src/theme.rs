//! Color palettes for Umbra
//!
//! Each resolved scheme maps to a fixed, immutable record of color
//! tokens. The values are the shell's design palette; widgets never hold
//! colors of their own beyond the accent constants below.
//!
//! # Usage
//!
//! ```rust
//! use app_state::EffectiveScheme;
//! use app_ui::theme::{palette_for, parse_hex_color};
//!
//! let palette = palette_for(EffectiveScheme::Dark);
//! assert!(parse_hex_color(&palette.background).is_some());
//! ```

use app_state::EffectiveScheme;
use serde::{Deserialize, Serialize};

/// A color represented as an RGBA hex string (e.g., "#FFFFFF" or "#FFFFFF80")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Append an alpha channel (0.0 - 1.0) to a 6-digit hex color
pub fn with_alpha(hex: &str, alpha: f32) -> Color {
    let byte = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("{}{:02X}", hex, byte)
}

/// Accent colors shared by both schemes
pub mod accent {
    /// Sun glyph color
    pub const SUN: &str = "#FDB813";

    /// Moon glyph color
    pub const MOON: &str = "#4A5568";

    /// Switch track when on
    pub const SWITCH_TRACK_ON: &str = "#3B82F6";

    /// Switch track when off
    pub const SWITCH_TRACK_OFF: &str = "#D1D5DB";

    /// Switch thumb when on
    pub const SWITCH_THUMB_ON: &str = "#FFFFFF";

    /// Switch thumb when off
    pub const SWITCH_THUMB_OFF: &str = "#F3F4F6";
}

/// Fixed color tokens for one resolved scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePalette {
    /// Root background color
    pub background: Color,
    /// Card/elevated surface color
    pub card: Color,
    /// Border color
    pub border: Color,
    /// Primary text color
    pub foreground: Color,
    /// Muted surface color
    pub muted: Color,
    /// Secondary/muted text color
    pub muted_foreground: Color,
    /// Primary action color
    pub primary: Color,
    /// Text color on primary surfaces
    pub primary_foreground: Color,
}

/// Create the light palette
pub fn light_palette() -> ThemePalette {
    ThemePalette {
        background: "#FFFFFF".to_string(),
        card: "#FFFFFF".to_string(),
        border: "#E4E4E7".to_string(),
        foreground: "#09090B".to_string(),
        muted: "#F4F4F5".to_string(),
        muted_foreground: "#71717A".to_string(),
        primary: "#18181B".to_string(),
        primary_foreground: "#FAFAFA".to_string(),
    }
}

/// Create the dark palette
pub fn dark_palette() -> ThemePalette {
    ThemePalette {
        background: "#09090B".to_string(),
        card: "#09090B".to_string(),
        border: "#27272A".to_string(),
        foreground: "#FAFAFA".to_string(),
        muted: "#27272A".to_string(),
        muted_foreground: "#A1A1AA".to_string(),
        primary: "#FAFAFA".to_string(),
        primary_foreground: "#18181B".to_string(),
    }
}

/// Get the palette for a resolved scheme
pub fn palette_for(scheme: EffectiveScheme) -> ThemePalette {
    match scheme {
        EffectiveScheme::Light => light_palette(),
        EffectiveScheme::Dark => dark_palette(),
    }
}
