//! Design tokens for Umbra
//!
//! Spacing, sizing, radius, shadow, and motion primitives shared by the
//! shell's components.

use serde::{Deserialize, Serialize};

/// Spacing scale in pixels
/// Based on a 4px base unit with t-shirt sizes
pub mod spacing {
    /// 4px - Extra small
    pub const SPACE_XS: f32 = 4.0;
    /// 8px - Small
    pub const SPACE_SM: f32 = 8.0;
    /// 12px - Medium
    pub const SPACE_MD: f32 = 12.0;
    /// 16px - Large
    pub const SPACE_LG: f32 = 16.0;
    /// 20px - Extra large
    pub const SPACE_XL: f32 = 20.0;
    /// 24px - 2x large
    pub const SPACE_2XL: f32 = 24.0;

    /// Get spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "xs" => Some(SPACE_XS),
            "sm" => Some(SPACE_SM),
            "md" => Some(SPACE_MD),
            "lg" => Some(SPACE_LG),
            "xl" => Some(SPACE_XL),
            "2xl" => Some(SPACE_2XL),
            _ => None,
        }
    }
}

/// Size tokens for component dimensions
pub mod sizing {
    /// Icon sizes
    pub mod icon {
        /// Extra small icon (12px)
        pub const XS: f32 = 12.0;
        /// Small icon (16px)
        pub const SM: f32 = 16.0;
        /// Medium icon (20px)
        pub const MD: f32 = 20.0;
        /// Large icon (24px)
        pub const LG: f32 = 24.0;
        /// Extra large icon (32px)
        pub const XL: f32 = 32.0;
    }
}

/// Border radius tokens
pub mod radius {
    /// No radius
    pub const NONE: f32 = 0.0;
    /// Small radius (4px)
    pub const SM: f32 = 4.0;
    /// Medium radius (8px)
    pub const MD: f32 = 8.0;
    /// Large radius (12px)
    pub const LG: f32 = 12.0;
    /// Fully round (pill/circle)
    pub const FULL: f32 = 9999.0;
}

/// Border width tokens
pub mod border {
    /// No border
    pub const NONE: f32 = 0.0;
    /// Hairline border (0.5px)
    pub const HAIRLINE: f32 = 0.5;
    /// Thin border (1px)
    pub const THIN: f32 = 1.0;
    /// Medium border (2px)
    pub const MEDIUM: f32 = 2.0;
}

/// A drop shadow description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur: f32,
    /// Spread radius
    pub spread: f32,
    /// Shadow color (RGBA hex)
    pub color: String,
}

impl Shadow {
    /// Create a new shadow
    pub fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: &str) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color: color.to_string(),
        }
    }
}

/// Shadow presets
pub mod shadows {
    use super::Shadow;

    /// No shadow
    pub fn none() -> Shadow {
        Shadow::new(0.0, 0.0, 0.0, 0.0, "#00000000")
    }

    /// Subtle card shadow (5% black, 1px down, 2px blur)
    pub fn card() -> Shadow {
        Shadow::new(0.0, 1.0, 2.0, 0.0, "#0000000D")
    }
}

/// Animation duration tokens (in milliseconds)
pub mod duration {
    /// Instant (0ms)
    pub const INSTANT: u32 = 0;
    /// Fast (100ms)
    pub const FAST: u32 = 100;
    /// Normal (150ms)
    pub const NORMAL: u32 = 150;
    /// Moderate (200ms)
    pub const MODERATE: u32 = 200;
    /// Slow (300ms)
    pub const SLOW: u32 = 300;
}

/// Easing curves
pub mod easing {
    /// Default easing curve (cubic-bezier)
    pub const DEFAULT: &str = "cubic-bezier(0.17, 0.73, 0.14, 1)";
    /// Linear
    pub const LINEAR: &str = "linear";
    /// Ease in out
    pub const EASE_IN_OUT: &str = "cubic-bezier(0.4, 0, 0.2, 1)";
    /// Bounce
    pub const BOUNCE: &str = "cubic-bezier(0.34, 1.56, 0.64, 1)";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::parse_hex_color;

    #[test]
    fn test_spacing_get() {
        assert_eq!(spacing::get("sm"), Some(8.0));
        assert_eq!(spacing::get("2xl"), Some(24.0));
        assert_eq!(spacing::get("10xl"), None);
    }

    #[test]
    fn test_spacing_scale_is_monotonic() {
        assert!(spacing::SPACE_XS < spacing::SPACE_SM);
        assert!(spacing::SPACE_SM < spacing::SPACE_MD);
        assert!(spacing::SPACE_MD < spacing::SPACE_LG);
        assert!(spacing::SPACE_LG < spacing::SPACE_XL);
        assert!(spacing::SPACE_XL < spacing::SPACE_2XL);
    }

    #[test]
    fn test_duration_scale_is_monotonic() {
        assert!(duration::INSTANT < duration::FAST);
        assert!(duration::FAST < duration::NORMAL);
        assert!(duration::NORMAL < duration::MODERATE);
        assert!(duration::MODERATE < duration::SLOW);
    }

    #[test]
    fn test_card_shadow_color_parses() {
        assert!(parse_hex_color(&shadows::card().color).is_some());
        assert_eq!(shadows::card().offset_y, 1.0);
    }

    #[test]
    fn test_shadow_serialization() {
        let shadow = shadows::card();
        let json = serde_json::to_string(&shadow).unwrap();
        let parsed: Shadow = serde_json::from_str(&json).unwrap();
        assert_eq!(shadow, parsed);
    }
}
