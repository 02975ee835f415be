//! `${expr}` substitution in template paths

use std::path::MAIN_SEPARATOR;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value as JsonValue;

use crate::utils::{get_nested, value_to_path_string};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

/// Render every `${expr}` placeholder in `rel_path` against `view`.
///
/// Segments are rendered independently, so a substituted value can never
/// merge two segments. Segments that render to the empty string are dropped
/// when the path is re-joined. This is plain textual substitution; no
/// conditionals or loops.
pub fn render_path(rel_path: &str, view: &JsonValue) -> String {
    let separator = MAIN_SEPARATOR.to_string();
    rel_path
        .split(MAIN_SEPARATOR)
        .map(|segment| render_segment(segment, view))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(&separator)
}

fn render_segment(segment: &str, view: &JsonValue) -> String {
    PLACEHOLDER
        .replace_all(segment, |caps: &Captures| {
            value_to_path_string(get_nested(view, caps[1].trim()))
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn p(parts: &[&str]) -> String {
        parts.join(&MAIN_SEPARATOR.to_string())
    }

    #[test]
    fn test_render_simple_placeholder() {
        let view = json!({ "name": "test" });
        assert_eq!(render_path("${name}.txt", &view), "test.txt");
    }

    #[test]
    fn test_render_nested_property_with_whitespace() {
        let view = json!({ "app": { "name": "myapp" } });
        assert_eq!(render_path("${ app.name }.txt", &view), "myapp.txt");
    }

    #[test]
    fn test_render_multiple_placeholders_in_one_segment() {
        let view = json!({ "name": "test", "version": "1.0" });
        assert_eq!(render_path("${name}-${version}.txt", &view), "test-1.0.txt");
    }

    #[test]
    fn test_render_mixed_static_and_dynamic_segments() {
        let view = json!({ "env": "prod", "version": "2.0" });
        assert_eq!(
            render_path(&p(&["configs", "${env}", "app-${version}.conf"]), &view),
            p(&["configs", "prod", "app-2.0.conf"])
        );
    }

    #[test]
    fn test_render_without_placeholders_is_identity() {
        let view = json!({ "unused": true });
        let input = p(&["static", "nested", "file.txt"]);
        assert_eq!(render_path(&input, &view), input);
    }

    #[test]
    fn test_render_missing_and_null_as_empty() {
        let view = json!({ "nothing": null });
        assert_eq!(render_path("${missing}.txt", &view), ".txt");
        assert_eq!(render_path("${nothing}.txt", &view), ".txt");
        assert_eq!(render_path("${nothing.deeper}.txt", &view), ".txt");
    }

    #[test]
    fn test_render_scalars_as_literal_text() {
        let view = json!({ "count": 42, "zero": 0, "flag": true });
        assert_eq!(render_path("file-${count}.txt", &view), "file-42.txt");
        assert_eq!(render_path("file-${zero}.txt", &view), "file-0.txt");
        assert_eq!(render_path("${flag}.txt", &view), "true.txt");
    }

    #[test]
    fn test_render_drops_segments_that_render_empty() {
        let view = json!({});
        assert_eq!(render_path(&p(&["${missing}", "config.yaml.hbs"]), &view), "config.yaml.hbs");
    }

    #[test]
    fn test_value_does_not_leak_into_next_segment() {
        let view = json!({ "org": "acme", "repo": "tools" });
        assert_eq!(
            render_path(&p(&["${org}", "${repo}", "info.txt.hbs"]), &view),
            p(&["acme", "tools", "info.txt.hbs"])
        );
    }
}
