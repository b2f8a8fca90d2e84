//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `document` - Reading and decoding the JSON file
//! - `selector` - Terminal menu backed by `dialoguer`

pub mod document;
pub mod selector;

// Re-export for convenience
pub use document::{load_document, parse_document};
pub use selector::{fit_label, DialoguerSelector};
