//! User interface for Umbra
//!
//! This crate provides the UI layer: color palettes, design tokens,
//! animation descriptions, the theme-toggle widget family, and the root
//! navigation/layout shell.
//!
//! Components are headless: serializable prop structs with computed style
//! records, rendered by the host webview. Animations are descriptions
//! (target, duration, spring parameters) evaluated by the host's
//! animation driver; nothing in this crate runs a timing loop.
//!
//! # Modules
//!
//! - [`theme`] - Color palettes per resolved scheme
//! - [`tokens`] - Design tokens (spacing, radius, shadows, durations)
//! - [`animation`] - Animation and interpolation descriptions
//! - [`components`] - Shared UI primitives
//! - [`toggles`] - Theme-toggle widget family
//! - [`navigation`] - Root navigation/layout shell
//!
//! # Example
//!
//! ```rust
//! use app_state::EffectiveScheme;
//! use app_ui::theme::palette_for;
//! use app_ui::toggles::ThemeSegmentedControl;
//!
//! let palette = palette_for(EffectiveScheme::Dark);
//! let control = ThemeSegmentedControl::new(app_state::ColorScheme::System);
//! let styles = control.computed_styles(&palette);
//! assert_eq!(styles.options.len(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod animation;
pub mod components;
pub mod navigation;
pub mod theme;
pub mod toggles;
pub mod tokens;

// Re-export commonly used types
pub use theme::{dark_palette, light_palette, palette_for, Color, ThemePalette};

pub use tokens::{border, duration, easing, radius, shadows, sizing, spacing, Shadow};

pub use animation::{
    AnimatedValue, Animation, AnimationSpec, AnimationTarget, Interpolation, TargetAnimation,
};

pub use components::{
    AccessibilityProps, Alignment, Dimension, FlexDirection, Icon, IconSize, JustifyContent,
    Spacing, StyleProps, Switch,
};

pub use toggles::{
    AnimatedThemeToggle, SegmentOption, ThemeSegmentedControl, ThemeSwitchToggle,
    ThemeToggleButton, ToggleInteraction,
};

pub use navigation::{
    NavigationStack, NavigationTheme, Presentation, RootLayout, RootLayoutView, Route,
    SafeAreaInsets, ScreenOptions, StatusBar, StatusBarStyle,
};
