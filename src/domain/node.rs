//! Tree Builder
//!
//! Converts a decoded JSON value into an explicit tree of addressable nodes.
//! Every node carries a human-readable path from the root: object members
//! append `.key`, array members append `[index]`.

use serde_json::Value;

/// Path of the root node.
pub const ROOT_PATH: &str = "root";

/// Order in which object members become children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyOrder {
    /// Keys in the order they appear in the source document
    #[default]
    Document,
    /// Keys sorted by byte-wise string comparison
    Sorted,
}

/// A value in the document together with its path and child nodes.
///
/// Children are populated for objects and arrays only, one per member.
/// The tree borrows the decoded document and is never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<'a> {
    pub path: String,
    pub value: &'a Value,
    pub children: Vec<Node<'a>>,
}

/// Build the node tree for `value` rooted at `path`, keeping document order.
pub fn build_tree<'a>(value: &'a Value, path: impl Into<String>) -> Node<'a> {
    build_tree_with(value, path, KeyOrder::Document)
}

/// Build the node tree for `value` rooted at `path`.
pub fn build_tree_with<'a>(value: &'a Value, path: impl Into<String>, order: KeyOrder) -> Node<'a> {
    let node = build_node(value, path.into(), order);
    tracing::debug!(
        path = %node.path,
        nodes = node.descendant_count() + 1,
        "built node tree"
    );
    node
}

fn build_node(value: &Value, path: String, order: KeyOrder) -> Node<'_> {
    let children = match value {
        Value::Object(map) => {
            let mut members: Vec<(&String, &Value)> = map.iter().collect();
            if order == KeyOrder::Sorted {
                members.sort_by(|(a, _), (b, _)| a.cmp(b));
            }
            members
                .into_iter()
                .map(|(key, child)| build_node(child, format!("{}.{}", path, key), order))
                .collect()
        }
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, child)| build_node(child, format!("{}[{}]", path, index), order))
            .collect(),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Vec::new(),
    };

    Node {
        path,
        value,
        children,
    }
}

impl<'a> Node<'a> {
    /// Whether this node has nothing to descend into.
    ///
    /// Empty objects and arrays are leaves too.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// This node's path relative to `parent`.
    ///
    /// Strips the parent's path and one `.` separator, which leaves `key`
    /// for object members and `[index]` for array members.
    pub fn relative_path<'s>(&'s self, parent: &Node<'_>) -> &'s str {
        let suffix = self
            .path
            .strip_prefix(parent.path.as_str())
            .unwrap_or(&self.path);
        suffix.strip_prefix('.').unwrap_or(suffix)
    }

    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}
