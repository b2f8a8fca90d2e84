//! Property tests for the node tree.

use proptest::prelude::*;
use serde_json::Value;

use jsonbrowser::{build_tree, build_tree_with, KeyOrder, Node, ROOT_PATH};

use super::strategies::json_value;

fn count_values(value: &Value) -> usize {
    1 + match value {
        Value::Object(map) => map.values().map(count_values).sum(),
        Value::Array(items) => items.iter().map(count_values).sum(),
        _ => 0,
    }
}

fn check_node(node: &Node<'_>) -> Result<(), TestCaseError> {
    match node.value {
        Value::Object(map) => {
            prop_assert_eq!(node.children.len(), map.len());
            for ((key, value), child) in map.iter().zip(&node.children) {
                prop_assert_eq!(child.relative_path(node), key.as_str());
                prop_assert_eq!(&child.path, &format!("{}.{}", node.path, key));
                prop_assert!(std::ptr::eq(child.value, value));
            }
        }
        Value::Array(items) => {
            prop_assert_eq!(node.children.len(), items.len());
            for (index, child) in node.children.iter().enumerate() {
                prop_assert_eq!(&child.path, &format!("{}[{}]", node.path, index));
                prop_assert!(std::ptr::eq(child.value, &items[index]));
            }
        }
        _ => {
            prop_assert!(node.is_leaf());
        }
    }

    for child in &node.children {
        check_node(child)?;
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every member becomes exactly one child, in document order,
    /// with a path built from its parent's path.
    #[test]
    fn property_tree_mirrors_document(value in json_value()) {
        let root = build_tree(&value, ROOT_PATH);

        prop_assert_eq!(&root.path, ROOT_PATH);
        prop_assert_eq!(root.descendant_count() + 1, count_values(&value));
        check_node(&root)?;
    }

    /// PROPERTY: sorted order lists object children by key.
    #[test]
    fn property_sorted_children_are_sorted(value in json_value()) {
        let root = build_tree_with(&value, ROOT_PATH, KeyOrder::Sorted);

        let mut pending = vec![&root];
        while let Some(node) = pending.pop() {
            if node.value.is_object() {
                let keys: Vec<&str> = node.children.iter().map(|c| c.relative_path(node)).collect();
                let mut sorted = keys.clone();
                sorted.sort();
                prop_assert_eq!(keys, sorted);
            }
            pending.extend(node.children.iter());
        }
    }
}
