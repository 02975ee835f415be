//! Dot-path lookups into a values tree

use serde_json::Value as JsonValue;

/// Resolves a dot-separated key path against a tree of mappings.
///
/// Each segment is trimmed before lookup. Traversal stops with `None` as soon
/// as a segment is missing or the current node is not a mapping (this covers
/// `null` intermediates). Sequences are not indexable: there is no array-index
/// or wildcard syntax.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use tmplkit::utils::get_nested;
///
/// let view = json!({ "project": { "name": "MyApp" } });
/// assert_eq!(get_nested(&view, "project.name"), Some(&json!("MyApp")));
/// assert_eq!(get_nested(&view, "project.missing.deeper"), None);
/// ```
pub fn get_nested<'a>(tree: &'a JsonValue, key_path: &str) -> Option<&'a JsonValue> {
    key_path
        .split('.')
        .try_fold(tree, |node, segment| node.as_object()?.get(segment.trim()))
}

/// Canonical string form of a value as it appears in a rendered path.
///
/// `null` and absent values render as the empty string; scalars render as
/// their literal text. Sequences join their elements with `,` and mappings
/// render as compact JSON.
pub fn value_to_path_string(value: Option<&JsonValue>) -> String {
    match value {
        None | Some(JsonValue::Null) => String::new(),
        Some(JsonValue::String(s)) => s.clone(),
        Some(JsonValue::Bool(b)) => b.to_string(),
        Some(JsonValue::Number(n)) => n.to_string(),
        Some(JsonValue::Array(items)) => items
            .iter()
            .map(|item| value_to_path_string(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(obj @ JsonValue::Object(_)) => obj.to_string(),
    }
}
