//! Shared UI primitives for Umbra
//!
//! Components are defined as Rust structs with serializable properties
//! that can be rendered by the frontend (host webview). Each component
//! provides type-safe props with builder patterns, theme-aware styling,
//! and accessibility attributes.

use crate::theme::Color;
use crate::tokens::sizing;
use serde::{Deserialize, Serialize};

/// Component identifier
pub type ComponentId = String;

/// Event handler callback type (represented as a string identifier)
pub type EventHandler = String;

/// Style properties that can be applied to any component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleProps {
    /// Margin around the component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Spacing>,
    /// Padding inside the component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Spacing>,
    /// Width constraint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    /// Height constraint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Border radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    /// Border width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    /// Border color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Opacity (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    /// Flex grow factor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_grow: Option<f32>,
}

/// Check whether style props are all defaults
pub(crate) fn is_default_style(style: &StyleProps) -> bool {
    style == &StyleProps::default()
}

/// Spacing values (margin, padding)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Spacing {
    /// Uniform spacing on all sides
    Uniform(f32),
    /// Vertical and horizontal spacing
    Symmetric {
        /// Vertical spacing
        vertical: f32,
        /// Horizontal spacing
        horizontal: f32,
    },
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Uniform(0.0)
    }
}

impl Spacing {
    /// Create uniform spacing
    pub fn uniform(value: f32) -> Self {
        Spacing::Uniform(value)
    }

    /// Create symmetric spacing
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Spacing::Symmetric { vertical, horizontal }
    }
}

/// Dimension value (pixels, percentage, auto)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Dimension {
    /// Fixed pixel value
    Pixels(f32),
    /// Percentage of parent
    Percent(String),
    /// Auto-size
    #[default]
    Auto,
}

impl Dimension {
    /// Create a pixel dimension
    pub fn px(value: f32) -> Self {
        Dimension::Pixels(value)
    }

    /// Create a percentage dimension
    pub fn percent(value: f32) -> Self {
        Dimension::Percent(format!("{}%", value))
    }
}

/// Alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Stretch to fill
    #[default]
    Stretch,
    /// Align to start
    Start,
    /// Align to center
    Center,
    /// Align to end
    End,
}

/// Justify content options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    /// Start (default)
    #[default]
    Start,
    /// Center
    Center,
    /// End
    End,
    /// Space between
    SpaceBetween,
}

/// Flex direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    /// Row (horizontal)
    #[default]
    Row,
    /// Column (vertical)
    Column,
}

/// Accessibility properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityProps {
    /// Accessible label for screen readers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Accessible hint/description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// ARIA role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Icon size variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSize {
    /// Extra small (12px)
    Xs,
    /// Small (16px)
    Sm,
    /// Medium (20px)
    #[default]
    Md,
    /// Large (24px)
    Lg,
    /// Extra large (32px)
    Xl,
    /// Custom pixel size
    Custom(u32),
}

impl IconSize {
    /// Get the pixel size
    pub fn pixels(&self) -> f32 {
        match self {
            IconSize::Xs => sizing::icon::XS,
            IconSize::Sm => sizing::icon::SM,
            IconSize::Md => sizing::icon::MD,
            IconSize::Lg => sizing::icon::LG,
            IconSize::Xl => sizing::icon::XL,
            IconSize::Custom(px) => *px as f32,
        }
    }
}

/// Icon component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    /// Icon name (from icon set)
    pub name: String,
    /// Icon size
    #[serde(default)]
    pub size: IconSize,
    /// Icon color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Accessible label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Icon {
    /// Create a new icon
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: IconSize::Md,
            color: None,
            label: None,
        }
    }

    /// Set icon size
    pub fn with_size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    /// Set icon color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set accessible label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the pixel size
    pub fn pixel_size(&self) -> f32 {
        self.size.pixels()
    }
}

/// Binary on/off switch component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Switch {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Current value
    pub value: bool,
    /// On change event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_change: Option<EventHandler>,
    /// Track color when on
    pub track_color_on: Color,
    /// Track color when off
    pub track_color_off: Color,
    /// Thumb color
    pub thumb_color: Color,
    /// Accessibility props
    #[serde(default, skip_serializing_if = "is_default_a11y")]
    pub accessibility: AccessibilityProps,
}

fn is_default_a11y(a11y: &AccessibilityProps) -> bool {
    a11y == &AccessibilityProps::default()
}

impl Switch {
    /// Create a new switch with the given value
    pub fn new(value: bool) -> Self {
        Self {
            id: None,
            value,
            on_change: None,
            track_color_on: crate::theme::accent::SWITCH_TRACK_ON.to_string(),
            track_color_off: crate::theme::accent::SWITCH_TRACK_OFF.to_string(),
            thumb_color: if value {
                crate::theme::accent::SWITCH_THUMB_ON.to_string()
            } else {
                crate::theme::accent::SWITCH_THUMB_OFF.to_string()
            },
            accessibility: AccessibilityProps::default(),
        }
    }

    /// Set the on change handler
    pub fn on_change(mut self, handler: impl Into<String>) -> Self {
        self.on_change = Some(handler.into());
        self
    }

    /// Set the accessible label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility.label = Some(label.into());
        self
    }

    /// The track color for the current value
    pub fn current_track_color(&self) -> &str {
        if self.value {
            &self.track_color_on
        } else {
            &self.track_color_off
        }
    }
}
