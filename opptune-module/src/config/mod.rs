//! Configuration loading and validation
//!
//! Configuration is TOML, parsed with the `toml` crate into
//! [`opptune_core::config::ModuleConfig`]. A default `opptune.toml` is
//! compiled in and validated by the build script.

pub mod loader;

pub use loader::{load_config, parse_config, validate, ConfigError, EMBEDDED_CONFIG};
