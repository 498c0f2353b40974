//! Configuration types
//!
//! Board-agnostic module configuration, deserialized from TOML by the
//! module crate.

pub mod types;

pub use types::*;
