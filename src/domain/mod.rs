//! Domain Layer
//!
//! The core of jsonbrowser: the node tree built from a decoded JSON document
//! and the previews shown for it. Nothing here touches the terminal or the
//! file system.
//!
//! ## Structure
//!
//! - `node` - Tree Builder (`Node`, `build_tree`)
//! - `preview` - Preview Formatter (`preview`, `render_value`)
//! - `ports/` - Interface definitions for infrastructure (`Selector`)

pub mod node;
pub mod ports;
pub mod preview;

pub use node::{build_tree, build_tree_with, KeyOrder, Node, ROOT_PATH};
pub use preview::{preview, render_value, PREVIEW_LIMIT};
