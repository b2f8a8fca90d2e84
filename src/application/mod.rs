//! Application Layer
//!
//! Use cases that orchestrate the flow between the domain tree and the
//! terminal.
//!
//! ## Use Cases
//!
//! - `Navigator` - Interactive drill-down through a node tree

pub mod navigator;

pub use navigator::{Menu, MenuAction, MenuLabels, Navigator};
