//! Configuration type definitions

use std::path::Path;

use serde::Deserialize;

use crate::domain::KeyOrder;
use crate::error::BrowseResult;
use crate::infrastructure::selector::DEFAULT_PAGE_SIZE;

use super::loader::{self, ConfigWarning};

/// Menu configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MenuConfig {
    /// Rows visible at once
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Show object members sorted by key instead of document order
    #[serde(default)]
    pub sort_keys: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            sort_keys: false,
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub menu: MenuConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load the explicit config file, or the user config file, or defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> BrowseResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit)
    }

    /// Key order for the node tree
    pub fn key_order(&self) -> KeyOrder {
        if self.menu.sort_keys {
            KeyOrder::Sorted
        } else {
            KeyOrder::Document
        }
    }
}
