//! Platform color scheme detection
//!
//! The host OS reports whether the user prefers a light or dark
//! appearance. Detection is wrapped behind [`SchemeSource`] so callers can
//! inject a deterministic source in tests and headless environments.

use serde::{Deserialize, Serialize};

/// Color scheme reported by the host platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformScheme {
    /// The platform prefers a light appearance
    Light,
    /// The platform prefers a dark appearance
    Dark,
}

/// Source of the platform-reported color scheme
///
/// `None` means the platform could not report a preference; callers are
/// expected to fall back to a default.
pub trait SchemeSource: Send + Sync {
    /// Read the currently reported scheme
    fn detect(&self) -> Option<PlatformScheme>;
}

/// Production source backed by the OS appearance settings
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSchemeSource;

impl SystemSchemeSource {
    /// Create a new system-backed source
    pub fn new() -> Self {
        Self
    }
}

impl SchemeSource for SystemSchemeSource {
    fn detect(&self) -> Option<PlatformScheme> {
        match dark_light::detect() {
            dark_light::Mode::Dark => Some(PlatformScheme::Dark),
            dark_light::Mode::Light => Some(PlatformScheme::Light),
        }
    }
}

/// Fixed source for tests and headless environments
#[derive(Debug, Clone, Copy)]
pub struct FixedSchemeSource {
    scheme: Option<PlatformScheme>,
}

impl FixedSchemeSource {
    /// Always report the given scheme
    pub fn new(scheme: PlatformScheme) -> Self {
        Self { scheme: Some(scheme) }
    }

    /// Never report a scheme
    pub fn unavailable() -> Self {
        Self { scheme: None }
    }
}

impl SchemeSource for FixedSchemeSource {
    fn detect(&self) -> Option<PlatformScheme> {
        self.scheme
    }
}
