//! Terminal UI for the jsonbrowser binary.

pub mod context;
pub mod error;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
