//! jsonbrowser - Interactive terminal browser for JSON documents
//!
//! Parses a JSON file into a tree of addressable nodes and lets the user
//! drill into objects and arrays through a selectable menu, backing out
//! again level by level.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{Menu, MenuAction, MenuLabels, Navigator};
pub use config::Config;
pub use domain::ports::{SelectionError, Selector};
pub use domain::{build_tree, build_tree_with, preview, render_value, KeyOrder, Node, ROOT_PATH};
pub use error::{BrowseError, BrowseResult};
pub use infrastructure::{load_document, parse_document, DialoguerSelector};
