//! Storage layer for Umbra
//!
//! This crate defines the persisted application state schema and the
//! persistence manager that reads and writes it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app_state;
pub mod persistence;

pub use app_state::{AppPersistedState, ColorScheme, CURRENT_SCHEMA_VERSION};
pub use persistence::{PersistedState, PersistenceConfig, PersistenceError};
