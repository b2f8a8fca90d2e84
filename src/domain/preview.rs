//! Preview Formatter
//!
//! Short descriptive strings for menu entries.

use serde_json::Value;

/// Maximum length of a scalar preview, in characters.
pub const PREVIEW_LIMIT: usize = 50;

const ELLIPSIS: &str = "...";

/// Summarize `value` for a menu entry.
///
/// Containers show their member count; everything else shows its textual
/// rendering, cut to [`PREVIEW_LIMIT`] characters.
pub fn preview(value: &Value) -> String {
    match value {
        Value::Object(map) => format!("Object ({} keys)", map.len()),
        Value::Array(items) => format!("Array ({} items)", items.len()),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            truncate(&render_value(value), PREVIEW_LIMIT)
        }
    }
}

/// Default textual rendering of a value.
///
/// Strings render without quotes. Containers render as compact JSON, which
/// is what the leaf display shows for empty objects and arrays.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => value.to_string(),
    }
}

/// Cut `text` to at most `limit` characters, ending in `...` when cut.
fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let keep = limit.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}
