//! Platform-specific code for Umbra
//!
//! This crate wraps host platform queries. The only query the shell needs
//! today is the reported color scheme.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod scheme;

pub use scheme::{FixedSchemeSource, PlatformScheme, SchemeSource, SystemSchemeSource};
