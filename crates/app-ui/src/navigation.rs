//! Root navigation and layout shell
//!
//! The shell composes safe-area insets, a navigation theme derived from
//! the resolved scheme, a themed status bar, and a fixed two-route stack:
//! a tabbed home route and a modally-presented secondary route.

use app_state::EffectiveScheme;
use serde::{Deserialize, Serialize};

use crate::theme::{palette_for, Color};

// =============================================================================
// Routes
// =============================================================================

/// The two routes of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Tabbed home route
    #[default]
    Tabs,
    /// Modally-presented secondary route
    Modal,
}

impl Route {
    /// Get a display title for this route
    pub fn title(&self) -> &'static str {
        match self {
            Route::Tabs => "Home",
            Route::Modal => "Modal",
        }
    }

    /// Screen options for this route
    pub fn options(&self) -> ScreenOptions {
        match self {
            Route::Tabs => ScreenOptions {
                header_shown: false,
                presentation: Presentation::Card,
                title: None,
            },
            Route::Modal => ScreenOptions {
                header_shown: true,
                presentation: Presentation::Modal,
                title: Some("Modal".to_string()),
            },
        }
    }
}

/// How a screen is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Presentation {
    /// Standard card push
    #[default]
    Card,
    /// Modal sheet over the current content
    Modal,
}

/// Per-screen presentation options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenOptions {
    /// Whether the header bar is shown
    pub header_shown: bool,
    /// Presentation style
    pub presentation: Presentation,
    /// Header title override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

// =============================================================================
// Navigation stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Navigation stack with modal presentation
///
/// The stack is rooted at [`Route::Tabs`]; the modal route overlays it
/// rather than replacing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    /// Base entries (bottom to top)
    entries: Vec<StackEntry>,
    /// Modal overlay entries
    modal_stack: Vec<StackEntry>,
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationStack {
    /// Create the shell stack rooted at the tabbed home route
    pub fn new() -> Self {
        Self {
            entries: vec![StackEntry::new(Route::Tabs)],
            modal_stack: Vec::new(),
        }
    }

    /// Get the current route (considering modals)
    pub fn current(&self) -> Route {
        self.modal_stack
            .last()
            .or_else(|| self.entries.last())
            .expect("Stack should never be empty")
            .route
    }

    /// Present the modal route
    pub fn present_modal(&mut self) {
        self.modal_stack.push(StackEntry::new(Route::Modal));
    }

    /// Dismiss the top modal (returns false if none is presented)
    pub fn dismiss_modal(&mut self) -> bool {
        self.modal_stack.pop().is_some()
    }

    /// Check if any modals are presented
    pub fn has_modals(&self) -> bool {
        !self.modal_stack.is_empty()
    }

    /// Go back: dismissing a modal is the only backward step
    pub fn go_back(&mut self) -> bool {
        self.dismiss_modal()
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.has_modals()
    }

    /// All routes of the shell with their options, in declaration order
    pub fn screens() -> [(Route, ScreenOptions); 2] {
        [
            (Route::Tabs, Route::Tabs.options()),
            (Route::Modal, Route::Modal.options()),
        ]
    }
}

// =============================================================================
// Navigation theme
// =============================================================================

/// Colors applied to the navigation chrome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationTheme {
    /// Whether this is the dark navigation theme
    pub dark: bool,
    /// Primary accent color
    pub primary: Color,
    /// Scene background color
    pub background: Color,
    /// Header/card background color
    pub card: Color,
    /// Text color
    pub text: Color,
    /// Separator color
    pub border: Color,
}

impl NavigationTheme {
    /// The light navigation theme
    pub fn light() -> Self {
        let palette = palette_for(EffectiveScheme::Light);
        Self {
            dark: false,
            primary: palette.primary,
            background: palette.background,
            card: palette.card,
            text: palette.foreground,
            border: palette.border,
        }
    }

    /// The dark navigation theme
    pub fn dark() -> Self {
        let palette = palette_for(EffectiveScheme::Dark);
        Self {
            dark: true,
            primary: palette.primary,
            background: palette.background,
            card: palette.card,
            text: palette.foreground,
            border: palette.border,
        }
    }

    /// The navigation theme for a resolved scheme
    pub fn for_scheme(scheme: EffectiveScheme) -> Self {
        match scheme {
            EffectiveScheme::Light => Self::light(),
            EffectiveScheme::Dark => Self::dark(),
        }
    }
}

// =============================================================================
// Status bar
// =============================================================================

/// Status bar content style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusBarStyle {
    /// Light glyphs, for dark backgrounds
    Light,
    /// Dark glyphs, for light backgrounds
    Dark,
}

/// Status bar description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusBar {
    /// Glyph style
    pub style: StatusBarStyle,
    /// Background color behind the status bar
    pub background: Color,
}

impl StatusBar {
    /// The status bar for a resolved scheme
    ///
    /// A dark scheme gets light glyphs and vice versa; the background
    /// matches the scene background.
    pub fn for_scheme(scheme: EffectiveScheme) -> Self {
        let palette = palette_for(scheme);
        Self {
            style: if scheme.is_dark() {
                StatusBarStyle::Light
            } else {
                StatusBarStyle::Dark
            },
            background: palette.background,
        }
    }
}

// =============================================================================
// Safe area and root layout
// =============================================================================

/// Safe area insets reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SafeAreaInsets {
    /// Top inset (status bar / notch)
    pub top: f32,
    /// Right inset
    pub right: f32,
    /// Bottom inset (home indicator)
    pub bottom: f32,
    /// Left inset
    pub left: f32,
}

impl SafeAreaInsets {
    /// Create insets with explicit values
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }
}

/// Style applied to the safe-area container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafeAreaStyle {
    /// Flex factor (fills the screen)
    pub flex: f32,
    /// Background color behind all content
    pub background: Color,
    /// Insets applied as padding
    pub insets: SafeAreaInsets,
}

/// Root layout shell
///
/// Pure view construction: reads the resolved scheme and returns a
/// description of the whole shell. There are no error states; an
/// unresolved scheme cannot occur upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootLayout {
    insets: SafeAreaInsets,
}

impl RootLayout {
    /// Create a shell with zero insets
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shell with host-reported insets
    pub fn with_insets(insets: SafeAreaInsets) -> Self {
        Self { insets }
    }

    /// Compose the shell for a resolved scheme
    pub fn compose(&self, scheme: EffectiveScheme) -> RootLayoutView {
        let palette = palette_for(scheme);

        RootLayoutView {
            safe_area: SafeAreaStyle {
                flex: 1.0,
                background: palette.background,
                insets: self.insets,
            },
            navigation_theme: NavigationTheme::for_scheme(scheme),
            status_bar: StatusBar::for_scheme(scheme),
            stack: NavigationStack::new(),
        }
    }
}

/// Description of the composed shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootLayoutView {
    /// Safe-area container style
    pub safe_area: SafeAreaStyle,
    /// Navigation chrome colors
    pub navigation_theme: NavigationTheme,
    /// Status bar description
    pub status_bar: StatusBar,
    /// The two-route stack
    pub stack: NavigationStack,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_titles() {
        assert_eq!(Route::Tabs.title(), "Home");
        assert_eq!(Route::Modal.title(), "Modal");
    }

    #[test]
    fn test_route_options() {
        let tabs = Route::Tabs.options();
        assert!(!tabs.header_shown);
        assert_eq!(tabs.presentation, Presentation::Card);

        let modal = Route::Modal.options();
        assert!(modal.header_shown);
        assert_eq!(modal.presentation, Presentation::Modal);
        assert_eq!(modal.title.as_deref(), Some("Modal"));
    }

    #[test]
    fn test_stack_is_fixed_two_routes() {
        let screens = NavigationStack::screens();
        assert_eq!(screens.len(), 2);
        assert_eq!(screens[0].0, Route::Tabs);
        assert_eq!(screens[1].0, Route::Modal);
    }

    #[test]
    fn test_stack_roots_at_tabs() {
        let stack = NavigationStack::new();
        assert_eq!(stack.current(), Route::Tabs);
        assert!(!stack.can_go_back());
    }

    #[test]
    fn test_modal_presentation() {
        let mut stack = NavigationStack::new();
        assert!(!stack.has_modals());

        stack.present_modal();
        assert!(stack.has_modals());
        assert_eq!(stack.current(), Route::Modal);

        assert!(stack.go_back());
        assert!(!stack.has_modals());
        assert_eq!(stack.current(), Route::Tabs);

        // Can't go back past the root
        assert!(!stack.go_back());
    }

    #[test]
    fn test_navigation_theme_for_scheme() {
        let light = NavigationTheme::for_scheme(EffectiveScheme::Light);
        assert!(!light.dark);
        assert_eq!(light.background, "#FFFFFF");
        assert_eq!(light.text, "#09090B");

        let dark = NavigationTheme::for_scheme(EffectiveScheme::Dark);
        assert!(dark.dark);
        assert_eq!(dark.background, "#09090B");
        assert_eq!(dark.text, "#FAFAFA");
    }

    #[test]
    fn test_status_bar_style_inverts_scheme() {
        let dark = StatusBar::for_scheme(EffectiveScheme::Dark);
        assert_eq!(dark.style, StatusBarStyle::Light);
        assert_eq!(dark.background, "#09090B");

        let light = StatusBar::for_scheme(EffectiveScheme::Light);
        assert_eq!(light.style, StatusBarStyle::Dark);
        assert_eq!(light.background, "#FFFFFF");
    }

    #[test]
    fn test_compose_light_shell() {
        let view = RootLayout::new().compose(EffectiveScheme::Light);

        assert_eq!(view.safe_area.flex, 1.0);
        assert_eq!(view.safe_area.background, "#FFFFFF");
        assert!(!view.navigation_theme.dark);
        assert_eq!(view.status_bar.style, StatusBarStyle::Dark);
        assert_eq!(view.stack.current(), Route::Tabs);
    }

    #[test]
    fn test_compose_dark_shell() {
        let view = RootLayout::new().compose(EffectiveScheme::Dark);

        assert_eq!(view.safe_area.background, "#09090B");
        assert!(view.navigation_theme.dark);
        assert_eq!(view.status_bar.style, StatusBarStyle::Light);
    }

    #[test]
    fn test_compose_carries_insets() {
        let insets = SafeAreaInsets::new(47.0, 0.0, 34.0, 0.0);
        let view = RootLayout::with_insets(insets).compose(EffectiveScheme::Light);

        assert_eq!(view.safe_area.insets, insets);
    }

    #[test]
    fn test_view_serialization() {
        let view = RootLayout::new().compose(EffectiveScheme::Dark);
        let json = serde_json::to_string(&view).unwrap();
        let parsed: RootLayoutView = serde_json::from_str(&json).unwrap();
        assert_eq!(view, parsed);
    }
}
