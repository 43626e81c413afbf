//! Application state management for Umbra
//!
//! This crate provides the reactive theme preference store that the UI
//! layer subscribes to.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod theme;

pub use storage::ColorScheme;
pub use theme::{EffectiveScheme, ThemeEvent, ThemeStore, ThemeStoreError};
