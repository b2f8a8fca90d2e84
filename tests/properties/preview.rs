//! Property tests for previews.

use proptest::prelude::*;
use serde_json::Value;

use jsonbrowser::{preview, render_value};

use super::strategies::json_value;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: scalar previews never exceed 50 characters.
    #[test]
    fn property_preview_is_bounded(value in json_value()) {
        let text = preview(&value);
        if !(value.is_object() || value.is_array()) {
            prop_assert!(text.chars().count() <= 50);
        }
    }

    /// PROPERTY: a short string previews as itself; a long one keeps its
    /// first 47 characters followed by `...`.
    #[test]
    fn property_string_preview_prefix(s in "(?s).{0,120}") {
        let text = preview(&Value::String(s.clone()));
        if s.chars().count() <= 50 {
            prop_assert_eq!(text, s);
        } else {
            let head: String = s.chars().take(47).collect();
            prop_assert_eq!(text, format!("{}...", head));
        }
    }

    /// PROPERTY: containers preview their member count.
    #[test]
    fn property_container_preview_counts(value in json_value()) {
        match &value {
            Value::Object(map) => {
                prop_assert_eq!(preview(&value), format!("Object ({} keys)", map.len()));
            }
            Value::Array(items) => {
                prop_assert_eq!(preview(&value), format!("Array ({} items)", items.len()));
            }
            _ => {}
        }
    }

    /// PROPERTY: container renderings are valid JSON equal to the value.
    #[test]
    fn property_container_rendering_round_trips(value in json_value()) {
        if value.is_object() || value.is_array() {
            let parsed: Value = serde_json::from_str(&render_value(&value)).unwrap();
            prop_assert_eq!(parsed, value);
        }
    }
}
