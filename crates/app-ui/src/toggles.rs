//! Theme-toggle widget family
//!
//! Four presentational variants over the same two capabilities: read the
//! current scheme and request a scheme change. Widgets are rebuilt from a
//! store snapshot on every render; interaction methods return the
//! requested [`ColorScheme`] for the caller to forward to
//! `ThemeStore::set_color_scheme`, plus an animation plan for the host
//! driver. Widgets own nothing beyond transient animation progress.

use app_state::{ColorScheme, EffectiveScheme};
use serde::{Deserialize, Serialize};

use crate::animation::{
    AnimatedValue, Animation, AnimationSpec, AnimationTarget, Interpolation, TargetAnimation,
};
use crate::components::{Icon, IconSize, StyleProps, Switch};
use crate::theme::{accent, with_alpha, Color, ThemePalette};
use crate::tokens::{border, duration, radius, shadows, spacing, Shadow};

/// Spring friction for the icon rotation
pub const ROTATION_FRICTION: f32 = 8.0;

/// Spring tension for the icon rotation
pub const ROTATION_TENSION: f32 = 40.0;

/// Scale reached at the bottom of the press animation
pub const PRESS_SCALE: f32 = 0.85;

/// Opacity applied while the control is pressed
pub const PRESSED_OPACITY: f32 = 0.8;

/// Rotation progress (0..1) mapped to degrees
pub fn rotation_degrees() -> Interpolation {
    Interpolation::new((0.0, 1.0), (0.0, 180.0))
}

/// Which layer of a toggle the press/rotation transform applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformLayer {
    /// A dedicated animated wrapper around the icon
    Wrapper,
    /// The icon itself
    Icon,
}

/// Result of a toggle interaction
///
/// `request` is the mutation value to forward to the theme store;
/// `animation` is the plan handed to the host animation driver. Both are
/// produced synchronously; nothing here can fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleInteraction {
    /// Requested scheme selection
    pub request: ColorScheme,
    /// Animation plan started by the interaction
    pub animation: Animation,
}

/// Glyph name and color offered for the current resolved scheme
///
/// Dark shows the sun (offering a switch to light); light shows the moon.
fn glyph_for(effective: EffectiveScheme) -> (&'static str, &'static str) {
    if effective.is_dark() {
        ("sunny", accent::SUN)
    } else {
        ("moon", accent::MOON)
    }
}

/// Rotation progress the icon rests at for a scheme
fn rotation_rest(effective: EffectiveScheme) -> f32 {
    if effective.is_dark() {
        1.0
    } else {
        0.0
    }
}

/// Press plan shared by the icon-button variants: scale dip and a spring
/// retargeting the rotation toward the opposite scheme's rest position.
fn press_plan(effective: EffectiveScheme) -> Animation {
    Animation::new()
        .with_track(TargetAnimation::sequence(
            AnimationTarget::Scale,
            vec![
                AnimationSpec::Timing { to: PRESS_SCALE, duration_ms: duration::FAST },
                AnimationSpec::Timing { to: 1.0, duration_ms: duration::FAST },
            ],
        ))
        .with_track(TargetAnimation::single(
            AnimationTarget::Rotation,
            AnimationSpec::Spring {
                to: rotation_rest(effective.opposite()),
                friction: ROTATION_FRICTION,
                tension: ROTATION_TENSION,
            },
        ))
}

/// Computed styles shared by the round icon-button variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconToggleStyles {
    /// Background color
    pub background: Color,
    /// Border color
    pub border_color: Color,
    /// Border width
    pub border_width: f32,
    /// Uniform padding
    pub padding: f32,
    /// Border radius (fully round)
    pub border_radius: f32,
    /// Card shadow
    pub shadow: Shadow,
    /// Opacity while pressed
    pub pressed_opacity: f32,
}

fn icon_toggle_styles(palette: &ThemePalette) -> IconToggleStyles {
    IconToggleStyles {
        background: palette.card.clone(),
        border_color: palette.border.clone(),
        border_width: border::THIN,
        padding: spacing::SPACE_MD,
        border_radius: radius::FULL,
        shadow: shadows::card(),
        pressed_opacity: PRESSED_OPACITY,
    }
}

// =============================================================================
// Animated icon-button variant
// =============================================================================

/// Round icon button toggling light/dark with an animated wrapper
///
/// Shows a sun when the resolved scheme is dark (offering light) and a
/// moon when light. Pressing emits the flipped explicit scheme; `System`
/// is never offered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimatedThemeToggle {
    /// Resolved scheme snapshot this widget was built from
    pub effective: EffectiveScheme,
    /// Cosmetic style override merged by the renderer
    #[serde(default, skip_serializing_if = "crate::components::is_default_style")]
    pub style: StyleProps,
    /// Rotation progress (0 = light rest, 1 = dark rest)
    pub rotation: AnimatedValue,
    /// Press scale
    pub scale: AnimatedValue,
}

impl AnimatedThemeToggle {
    /// Build the widget from a scheme snapshot
    pub fn new(effective: EffectiveScheme) -> Self {
        Self {
            effective,
            style: StyleProps::default(),
            rotation: AnimatedValue::new(rotation_rest(effective)),
            scale: AnimatedValue::new(1.0),
        }
    }

    /// Set a cosmetic style override
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// The icon currently shown
    pub fn icon(&self) -> Icon {
        let (name, color) = glyph_for(self.effective);
        Icon::new(name)
            .with_size(IconSize::Lg)
            .with_color(color)
            .with_label("Toggle theme")
    }

    /// Current rotation in degrees
    pub fn rotation_degrees(&self) -> f32 {
        rotation_degrees().map(self.rotation.value)
    }

    /// Handle a press: request the flipped scheme and start the press plan
    pub fn press(&self) -> ToggleInteraction {
        ToggleInteraction {
            request: self.effective.opposite().as_selection(),
            animation: press_plan(self.effective),
        }
    }

    /// Re-target the rotation spring after the resolved scheme changed
    ///
    /// Returns `None` when the snapshot already matches, so an unrelated
    /// re-render never restarts the spring.
    pub fn settle(&mut self, effective: EffectiveScheme) -> Option<Animation> {
        if self.effective == effective {
            return None;
        }

        self.effective = effective;
        Some(Animation::new().with_track(TargetAnimation::single(
            AnimationTarget::Rotation,
            AnimationSpec::Spring {
                to: rotation_rest(effective),
                friction: ROTATION_FRICTION,
                tension: ROTATION_TENSION,
            },
        )))
    }

    /// Transforms apply to a dedicated wrapper around the icon
    pub fn transform_layer(&self) -> TransformLayer {
        TransformLayer::Wrapper
    }

    /// Compute styles for the current palette
    pub fn computed_styles(&self, palette: &ThemePalette) -> IconToggleStyles {
        icon_toggle_styles(palette)
    }
}

// =============================================================================
// Plain icon-button variant
// =============================================================================

/// Round icon button toggling light/dark without the wrapper nesting
///
/// Same behavior as [`AnimatedThemeToggle`]; the rotation and scale
/// transforms apply to the icon itself, and the icon size is a cosmetic
/// parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeToggleButton {
    /// Resolved scheme snapshot this widget was built from
    pub effective: EffectiveScheme,
    /// Icon size in pixels
    pub size: f32,
    /// Rotation progress (0 = light rest, 1 = dark rest)
    pub rotation: AnimatedValue,
    /// Press scale
    pub scale: AnimatedValue,
}

impl ThemeToggleButton {
    /// Build the widget from a scheme snapshot with the default size
    pub fn new(effective: EffectiveScheme) -> Self {
        Self::with_size(effective, crate::tokens::sizing::icon::LG)
    }

    /// Build the widget with a custom icon size
    pub fn with_size(effective: EffectiveScheme, size: f32) -> Self {
        Self {
            effective,
            size,
            rotation: AnimatedValue::new(rotation_rest(effective)),
            scale: AnimatedValue::new(1.0),
        }
    }

    /// The icon currently shown
    pub fn icon(&self) -> Icon {
        let (name, color) = glyph_for(self.effective);
        Icon::new(name)
            .with_size(IconSize::Custom(self.size as u32))
            .with_color(color)
            .with_label("Toggle theme")
    }

    /// Handle a press: request the flipped scheme and start the press plan
    pub fn press(&self) -> ToggleInteraction {
        ToggleInteraction {
            request: self.effective.opposite().as_selection(),
            animation: press_plan(self.effective),
        }
    }

    /// Re-target the rotation spring after the resolved scheme changed
    pub fn settle(&mut self, effective: EffectiveScheme) -> Option<Animation> {
        if self.effective == effective {
            return None;
        }

        self.effective = effective;
        Some(Animation::new().with_track(TargetAnimation::single(
            AnimationTarget::Rotation,
            AnimationSpec::Spring {
                to: rotation_rest(effective),
                friction: ROTATION_FRICTION,
                tension: ROTATION_TENSION,
            },
        )))
    }

    /// Transforms apply directly to the icon
    pub fn transform_layer(&self) -> TransformLayer {
        TransformLayer::Icon
    }

    /// Compute styles for the current palette
    pub fn computed_styles(&self, palette: &ThemePalette) -> IconToggleStyles {
        icon_toggle_styles(palette)
    }
}

// =============================================================================
// Segmented variant
// =============================================================================

/// One option in the segmented control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentOption {
    /// Scheme this option selects
    pub value: ColorScheme,
    /// Display label
    pub label: String,
    /// Icon glyph name
    pub icon: String,
}

/// Three-way segmented control over light/dark/system
///
/// Exactly one option is highlighted at all times: the one matching the
/// *stored* selection, not the resolved scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSegmentedControl {
    /// Stored selection snapshot
    pub selection: ColorScheme,
    /// Cosmetic style override merged by the renderer
    #[serde(default, skip_serializing_if = "crate::components::is_default_style")]
    pub style: StyleProps,
}

impl ThemeSegmentedControl {
    /// Build the control from the stored selection
    pub fn new(selection: ColorScheme) -> Self {
        Self {
            selection,
            style: StyleProps::default(),
        }
    }

    /// Set a cosmetic style override
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// The three options, in presentation order
    pub fn options(&self) -> Vec<SegmentOption> {
        vec![
            SegmentOption {
                value: ColorScheme::Light,
                label: "Light".to_string(),
                icon: "sunny".to_string(),
            },
            SegmentOption {
                value: ColorScheme::Dark,
                label: "Dark".to_string(),
                icon: "moon".to_string(),
            },
            SegmentOption {
                value: ColorScheme::System,
                label: "System".to_string(),
                icon: "phone-portrait-outline".to_string(),
            },
        ]
    }

    /// Whether an option is the highlighted one
    pub fn is_selected(&self, value: ColorScheme) -> bool {
        self.selection == value
    }

    /// Handle selecting an option: the request is the option's scheme
    pub fn select(&self, value: ColorScheme) -> ColorScheme {
        value
    }

    /// Compute styles for the current palette
    pub fn computed_styles(&self, palette: &ThemePalette) -> SegmentedStyles {
        let inactive_background = with_alpha(&palette.muted, 0.5);

        let options = self
            .options()
            .into_iter()
            .map(|option| {
                let selected = self.is_selected(option.value);
                SegmentOptionStyles {
                    value: option.value,
                    selected,
                    background: if selected {
                        palette.primary.clone()
                    } else {
                        inactive_background.clone()
                    },
                    icon_color: if selected {
                        palette.primary_foreground.clone()
                    } else {
                        palette.muted_foreground.clone()
                    },
                    label_color: if selected {
                        palette.primary_foreground.clone()
                    } else {
                        palette.muted_foreground.clone()
                    },
                    label_font_size: 14.0,
                    label_font_weight: 500,
                    border_radius: radius::MD,
                    padding_vertical: spacing::SPACE_MD,
                    padding_horizontal: spacing::SPACE_LG,
                }
            })
            .collect();

        SegmentedStyles {
            container: SegmentedContainerStyles {
                background: palette.card.clone(),
                border_color: palette.border.clone(),
                border_width: border::THIN,
                border_radius: radius::LG,
                padding: spacing::SPACE_SM,
                gap: spacing::SPACE_SM,
                shadow: shadows::card(),
            },
            options,
        }
    }
}

/// Computed styles for the segmented control container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentedContainerStyles {
    /// Background color
    pub background: Color,
    /// Border color
    pub border_color: Color,
    /// Border width
    pub border_width: f32,
    /// Border radius
    pub border_radius: f32,
    /// Uniform padding
    pub padding: f32,
    /// Gap between options
    pub gap: f32,
    /// Card shadow
    pub shadow: Shadow,
}

/// Computed styles for one segmented option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentOptionStyles {
    /// Scheme this option selects
    pub value: ColorScheme,
    /// Whether this option is highlighted
    pub selected: bool,
    /// Background color
    pub background: Color,
    /// Icon color
    pub icon_color: Color,
    /// Label color
    pub label_color: Color,
    /// Label font size
    pub label_font_size: f32,
    /// Label font weight
    pub label_font_weight: u16,
    /// Border radius
    pub border_radius: f32,
    /// Vertical padding
    pub padding_vertical: f32,
    /// Horizontal padding
    pub padding_horizontal: f32,
}

/// Complete computed styles for the segmented control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentedStyles {
    /// Container styles
    pub container: SegmentedContainerStyles,
    /// Per-option styles, in presentation order
    pub options: Vec<SegmentOptionStyles>,
}

// =============================================================================
// Switch variant
// =============================================================================

/// Labeled row with a binary switch mapped to light/dark
///
/// `on` is equivalent to the resolved scheme being dark. Toggling emits
/// `Dark` when turned on and `Light` when turned off; `System` is never
/// produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSwitchToggle {
    /// Resolved scheme snapshot this widget was built from
    pub effective: EffectiveScheme,
    /// Cosmetic style override merged by the renderer
    #[serde(default, skip_serializing_if = "crate::components::is_default_style")]
    pub style: StyleProps,
}

impl ThemeSwitchToggle {
    /// Build the widget from a scheme snapshot
    pub fn new(effective: EffectiveScheme) -> Self {
        Self {
            effective,
            style: StyleProps::default(),
        }
    }

    /// Set a cosmetic style override
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// Whether the switch is on
    pub fn is_on(&self) -> bool {
        self.effective.is_dark()
    }

    /// The descriptive label for the current state
    pub fn label(&self) -> &'static str {
        if self.is_on() {
            "Dark Mode"
        } else {
            "Light Mode"
        }
    }

    /// The leading icon mirroring the current state
    pub fn icon(&self) -> Icon {
        let (name, color) = if self.is_on() {
            ("moon", accent::SUN)
        } else {
            ("sunny", accent::MOON)
        };
        Icon::new(name).with_size(IconSize::Lg).with_color(color)
    }

    /// The switch primitive for the current state
    pub fn switch(&self) -> Switch {
        Switch::new(self.is_on())
            .on_change("theme.switch")
            .with_label("Toggle dark mode")
    }

    /// Handle a value change: the request pins the matching scheme
    pub fn set(&self, on: bool) -> ColorScheme {
        if on {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    /// Compute styles for the current palette
    pub fn computed_styles(&self, palette: &ThemePalette) -> SwitchToggleStyles {
        SwitchToggleStyles {
            background: palette.card.clone(),
            border_color: palette.border.clone(),
            border_width: border::THIN,
            border_radius: radius::LG,
            padding: spacing::SPACE_LG,
            gap: spacing::SPACE_MD,
            label_color: palette.foreground.clone(),
            label_font_size: 16.0,
            label_font_weight: 500,
            shadow: shadows::card(),
        }
    }
}

/// Computed styles for the switch row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchToggleStyles {
    /// Background color
    pub background: Color,
    /// Border color
    pub border_color: Color,
    /// Border width
    pub border_width: f32,
    /// Border radius
    pub border_radius: f32,
    /// Uniform padding
    pub padding: f32,
    /// Gap between icon and label
    pub gap: f32,
    /// Label color
    pub label_color: Color,
    /// Label font size
    pub label_font_size: f32,
    /// Label font weight
    pub label_font_weight: u16,
    /// Card shadow
    pub shadow: Shadow,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette_for;

    #[test]
    fn test_icon_offers_opposite_scheme() {
        // Dark shows the sun (offering light), light shows the moon
        let dark = AnimatedThemeToggle::new(EffectiveScheme::Dark);
        assert_eq!(dark.icon().name, "sunny");
        assert_eq!(dark.icon().color.as_deref(), Some(accent::SUN));

        let light = AnimatedThemeToggle::new(EffectiveScheme::Light);
        assert_eq!(light.icon().name, "moon");
        assert_eq!(light.icon().color.as_deref(), Some(accent::MOON));
    }

    #[test]
    fn test_icon_variants_never_request_system() {
        for effective in [EffectiveScheme::Light, EffectiveScheme::Dark] {
            let animated = AnimatedThemeToggle::new(effective);
            assert_ne!(animated.press().request, ColorScheme::System);

            let button = ThemeToggleButton::new(effective);
            assert_ne!(button.press().request, ColorScheme::System);
        }
    }

    #[test]
    fn test_press_requests_flipped_scheme() {
        let toggle = AnimatedThemeToggle::new(EffectiveScheme::Dark);
        assert_eq!(toggle.press().request, ColorScheme::Light);

        let toggle = AnimatedThemeToggle::new(EffectiveScheme::Light);
        assert_eq!(toggle.press().request, ColorScheme::Dark);
    }

    #[test]
    fn test_press_plan_shape() {
        let toggle = AnimatedThemeToggle::new(EffectiveScheme::Light);
        let plan = toggle.press().animation;

        let scale = plan.track(AnimationTarget::Scale).unwrap();
        assert_eq!(
            scale.steps,
            vec![
                AnimationSpec::Timing { to: PRESS_SCALE, duration_ms: 100 },
                AnimationSpec::Timing { to: 1.0, duration_ms: 100 },
            ]
        );

        let rotation = plan.track(AnimationTarget::Rotation).unwrap();
        assert_eq!(
            rotation.steps,
            vec![AnimationSpec::Spring { to: 1.0, friction: 8.0, tension: 40.0 }]
        );
    }

    #[test]
    fn test_rotation_rest_positions() {
        let light = AnimatedThemeToggle::new(EffectiveScheme::Light);
        assert_eq!(light.rotation.value, 0.0);
        assert_eq!(light.rotation_degrees(), 0.0);

        let dark = AnimatedThemeToggle::new(EffectiveScheme::Dark);
        assert_eq!(dark.rotation.value, 1.0);
        assert_eq!(dark.rotation_degrees(), 180.0);
    }

    #[test]
    fn test_settle_retargets_spring_once() {
        let mut toggle = AnimatedThemeToggle::new(EffectiveScheme::Light);

        let plan = toggle.settle(EffectiveScheme::Dark).unwrap();
        let rotation = plan.track(AnimationTarget::Rotation).unwrap();
        assert_eq!(rotation.final_value(), Some(1.0));

        // Unrelated re-render with the same scheme restarts nothing
        assert!(toggle.settle(EffectiveScheme::Dark).is_none());
    }

    #[test]
    fn test_press_then_settle_scenario() {
        // Initial state: selection System, platform reports dark
        let mut toggle = AnimatedThemeToggle::new(EffectiveScheme::Dark);
        assert_eq!(toggle.icon().name, "sunny");

        // Press requests light
        let interaction = toggle.press();
        assert_eq!(interaction.request, ColorScheme::Light);

        // Store applied the change; widget settles and shows the moon
        toggle.settle(EffectiveScheme::Light).unwrap();
        assert_eq!(toggle.icon().name, "moon");
    }

    #[test]
    fn test_transform_layers_differ() {
        let animated = AnimatedThemeToggle::new(EffectiveScheme::Light);
        assert_eq!(animated.transform_layer(), TransformLayer::Wrapper);

        let button = ThemeToggleButton::new(EffectiveScheme::Light);
        assert_eq!(button.transform_layer(), TransformLayer::Icon);
    }

    #[test]
    fn test_button_size_parameter() {
        let button = ThemeToggleButton::new(EffectiveScheme::Light);
        assert_eq!(button.icon().pixel_size(), 24.0);

        let big = ThemeToggleButton::with_size(EffectiveScheme::Light, 32.0);
        assert_eq!(big.icon().pixel_size(), 32.0);
    }

    #[test]
    fn test_icon_toggle_styles_follow_palette() {
        let toggle = AnimatedThemeToggle::new(EffectiveScheme::Dark);
        let styles = toggle.computed_styles(&palette_for(EffectiveScheme::Dark));

        assert_eq!(styles.background, "#09090B");
        assert_eq!(styles.border_color, "#27272A");
        assert_eq!(styles.border_radius, radius::FULL);
        assert_eq!(styles.pressed_opacity, PRESSED_OPACITY);
    }

    #[test]
    fn test_segmented_exactly_one_selected() {
        for selection in [ColorScheme::Light, ColorScheme::Dark, ColorScheme::System] {
            let control = ThemeSegmentedControl::new(selection);
            let styles = control.computed_styles(&palette_for(EffectiveScheme::Light));

            let selected: Vec<_> = styles.options.iter().filter(|o| o.selected).collect();
            assert_eq!(selected.len(), 1);
            assert_eq!(selected[0].value, selection);
        }
    }

    #[test]
    fn test_segmented_highlights_stored_selection_not_effective() {
        // Selection is System but the platform renders dark: System stays
        // the highlighted option.
        let control = ThemeSegmentedControl::new(ColorScheme::System);
        assert!(control.is_selected(ColorScheme::System));
        assert!(!control.is_selected(ColorScheme::Dark));
    }

    #[test]
    fn test_segmented_select_emits_option_value() {
        let control = ThemeSegmentedControl::new(ColorScheme::Light);
        assert_eq!(control.select(ColorScheme::System), ColorScheme::System);
        assert_eq!(control.select(ColorScheme::Dark), ColorScheme::Dark);
    }

    #[test]
    fn test_segmented_option_order_and_icons() {
        let control = ThemeSegmentedControl::new(ColorScheme::Light);
        let options = control.options();

        assert_eq!(options.len(), 3);
        assert_eq!(options[0].icon, "sunny");
        assert_eq!(options[1].icon, "moon");
        assert_eq!(options[2].icon, "phone-portrait-outline");
        assert_eq!(options[2].label, "System");
    }

    #[test]
    fn test_segmented_selected_option_uses_primary() {
        let palette = palette_for(EffectiveScheme::Light);
        let control = ThemeSegmentedControl::new(ColorScheme::Dark);
        let styles = control.computed_styles(&palette);

        let dark_option = styles.options.iter().find(|o| o.value == ColorScheme::Dark).unwrap();
        assert_eq!(dark_option.background, palette.primary);
        assert_eq!(dark_option.label_color, palette.primary_foreground);

        let light_option = styles.options.iter().find(|o| o.value == ColorScheme::Light).unwrap();
        assert_eq!(light_option.background, with_alpha(&palette.muted, 0.5));
        assert_eq!(light_option.label_color, palette.muted_foreground);
    }

    #[test]
    fn test_switch_on_iff_dark() {
        assert!(ThemeSwitchToggle::new(EffectiveScheme::Dark).is_on());
        assert!(!ThemeSwitchToggle::new(EffectiveScheme::Light).is_on());
    }

    #[test]
    fn test_switch_never_requests_system() {
        let toggle = ThemeSwitchToggle::new(EffectiveScheme::Light);
        assert_eq!(toggle.set(true), ColorScheme::Dark);
        assert_eq!(toggle.set(false), ColorScheme::Light);
    }

    #[test]
    fn test_switch_label_reflects_state() {
        assert_eq!(ThemeSwitchToggle::new(EffectiveScheme::Dark).label(), "Dark Mode");
        assert_eq!(ThemeSwitchToggle::new(EffectiveScheme::Light).label(), "Light Mode");
    }

    #[test]
    fn test_switch_primitive_tracks_state() {
        let on = ThemeSwitchToggle::new(EffectiveScheme::Dark).switch();
        assert!(on.value);
        assert_eq!(on.current_track_color(), accent::SWITCH_TRACK_ON);

        let off = ThemeSwitchToggle::new(EffectiveScheme::Light).switch();
        assert!(!off.value);
        assert_eq!(off.current_track_color(), accent::SWITCH_TRACK_OFF);
    }

    #[test]
    fn test_switch_styles_follow_palette() {
        let palette = palette_for(EffectiveScheme::Light);
        let styles = ThemeSwitchToggle::new(EffectiveScheme::Light).computed_styles(&palette);

        assert_eq!(styles.background, palette.card);
        assert_eq!(styles.label_color, palette.foreground);
        assert_eq!(styles.label_font_size, 16.0);
    }

    #[test]
    fn test_widget_serialization() {
        let toggle = AnimatedThemeToggle::new(EffectiveScheme::Dark);
        let json = serde_json::to_string(&toggle).unwrap();
        let parsed: AnimatedThemeToggle = serde_json::from_str(&json).unwrap();
        assert_eq!(toggle, parsed);
    }
}
