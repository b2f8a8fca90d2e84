//! Test fixtures - reusable JSON documents for tests.

/// The two-level document used by the navigation scenarios
pub const SMALL_DOC: &str = r#"{"a": 1, "b": [2, 3]}"#;

/// A document with nested objects, arrays and every scalar kind
pub const NESTED_DOC: &str = r#"{
  "name": "jsonbrowser",
  "version": 1.5,
  "enabled": true,
  "owner": null,
  "tags": ["cli", "json"],
  "settings": {
    "menu": {"page_size": 15},
    "empty": {},
    "none": []
  }
}"#;

/// Not JSON at all
pub const NOT_JSON: &str = "not json";
