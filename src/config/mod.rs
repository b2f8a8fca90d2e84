//! Configuration module for jsonbrowser
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Config file (`--config <PATH>` or `<config_dir>/jsonbrowser/config.toml`)
//! 3. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{default_config_path, ConfigWarning};
pub use types::{ColorMode, Config, MenuConfig, OutputConfig};
