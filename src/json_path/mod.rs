//! Path extraction over parsed JSON documents.
//!
//! This is deliberately not a query language: no wildcards, slices or
//! filters. See [`path`] for the accepted syntax.
//!
//! # Example
//!
//! ```rust
//! use fetchnodes::json_path::extract;
//!
//! let doc = serde_json::json!({"a": [1, 2, {"b": "x"}]});
//! let selection = extract(&doc, "a[2].b").unwrap();
//! assert_eq!(selection.text, "x");
//! assert_eq!(selection.array_size, -1);
//! ```

pub mod path;
pub mod query;

use std::fmt::Write;

use serde_json::Value;

use crate::error::Result;

pub use path::{parse_path, resolve, PathSegment};
pub use query::{build_url, parse_query_block};

const IMAGE_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".gif"];

/// The three outputs computed for a selected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Pretty JSON for objects/arrays, plain text for scalars.
    pub text: String,
    /// Element count for arrays, -1 otherwise.
    pub array_size: i64,
    /// First image URL found anywhere under the selection, or empty.
    pub image_url: String,
}

/// Resolve `path` against `doc` and compute the [`Selection`].
pub fn extract(doc: &Value, path: &str) -> Result<Selection> {
    let segments = parse_path(path)?;
    let value = resolve(doc, &segments)?;
    Ok(select(value))
}

/// Compute the outputs for an already-resolved value.
#[must_use]
pub fn select(value: &Value) -> Selection {
    Selection {
        text: render(value),
        array_size: array_size(value),
        image_url: find_image_url(value).unwrap_or_default().to_string(),
    }
}

#[must_use]
pub fn array_size(value: &Value) -> i64 {
    value
        .as_array()
        .map_or(-1, |items| i64::try_from(items.len()).unwrap_or(i64::MAX))
}

/// Containers become pretty JSON (two-space indent, non-ASCII escaped);
/// strings are returned bare; numbers keep their source digits; booleans
/// and null read `True`, `False` and `None`.
#[must_use]
pub fn render(value: &Value) -> String {
    match value {
        Value::Object(_) | Value::Array(_) => {
            // Serializing a `Value` cannot fail.
            let pretty = serde_json::to_string_pretty(value).unwrap_or_default();
            escape_non_ascii(&pretty)
        }
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null => "None".to_string(),
        Value::Number(n) => n.to_string(),
    }
}

/// Escape every non-ASCII character and DEL as `\uXXXX` (surrogate pairs
/// above the BMP).
///
/// In serialized JSON these only occur inside string literals, so this
/// yields equivalent, printable-ASCII JSON. Other control characters are
/// already escaped by the serializer.
#[must_use]
pub fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        if c.is_ascii() && c != '\x7f' {
            out.push(c);
        } else {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                let _ = write!(out, "\\u{unit:04x}");
            }
        }
    }
    out
}

/// Depth-first search for the first string that looks like an image URL.
///
/// Objects are searched value by value in document order, arrays element by
/// element.
#[must_use]
pub fn find_image_url(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) if is_image_url(s) => Some(s),
        Value::Object(map) => map.values().find_map(find_image_url),
        Value::Array(items) => items.iter().find_map(find_image_url),
        _ => None,
    }
}

/// `http`-prefixed string containing a known image extension anywhere
/// (case-insensitive).
#[must_use]
pub fn is_image_url(s: &str) -> bool {
    if !s.starts_with("http") {
        return false;
    }
    let lower = s.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.contains(ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> Value {
        json!({"a": [1, 2, {"b": "x"}]})
    }

    #[test]
    fn extracts_nested_scalar() {
        let selection = extract(&doc(), "a[2].b").unwrap();
        assert_eq!(selection.text, "x");
        assert_eq!(selection.array_size, -1);
        assert_eq!(selection.image_url, "");
    }

    #[test]
    fn extracts_array_with_size() {
        let selection = extract(&doc(), "a").unwrap();
        assert_eq!(selection.array_size, 3);
        assert_eq!(
            selection.text,
            "[\n  1,\n  2,\n  {\n    \"b\": \"x\"\n  }\n]"
        );
    }

    #[test]
    fn empty_path_returns_whole_document() {
        let selection = extract(&doc(), "").unwrap();
        assert_eq!(selection.array_size, -1);
        let reparsed: Value = serde_json::from_str(&selection.text).unwrap();
        assert_eq!(reparsed, doc());
        assert!(selection.text.starts_with("{\n  \"a\": ["));
    }

    #[test]
    fn out_of_range_is_invalid_path() {
        let err = extract(&doc(), "a[5]").unwrap_err();
        assert_eq!(err.to_string(), "invalid path or key not found");
    }

    #[test]
    fn scalars_render_as_plain_text() {
        assert_eq!(render(&json!(42)), "42");
        assert_eq!(render(&json!(1.5)), "1.5");
        assert_eq!(render(&json!(true)), "True");
        assert_eq!(render(&json!(false)), "False");
        assert_eq!(render(&Value::Null), "None");
        assert_eq!(render(&json!("plain")), "plain");
    }

    #[test]
    fn booleans_and_null_selected_by_path() {
        let doc = json!({"ok": true, "n": null});
        assert_eq!(extract(&doc, "ok").unwrap().text, "True");
        assert_eq!(extract(&doc, "n").unwrap().text, "None");
    }

    #[test]
    fn big_integers_keep_every_digit() {
        let doc: Value =
            serde_json::from_str(r#"{"id": 123456789012345678901234567890}"#).unwrap();
        let whole = extract(&doc, "").unwrap();
        assert_eq!(whole.text, "{\n  \"id\": 123456789012345678901234567890\n}");
        let scalar = extract(&doc, "id").unwrap();
        assert_eq!(scalar.text, "123456789012345678901234567890");
    }

    #[test]
    fn delete_character_is_escaped_in_containers() {
        let text = render(&json!({"k": "a\u{7f}b"}));
        assert_eq!(text, "{\n  \"k\": \"a\\u007fb\"\n}");
        assert!(!text.contains('\u{7f}'));
    }

    #[test]
    fn containers_render_ascii_only() {
        let text = render(&json!({"name": "猫", "emoji": "😀"}));
        assert!(text.is_ascii());
        assert!(text.contains(r#""name": "\u732b""#));
        assert!(text.contains(r#""emoji": "\ud83d\ude00""#));
        let reparsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(reparsed["name"], "猫");
        assert_eq!(reparsed["emoji"], "😀");
    }

    #[test]
    fn bare_string_keeps_unicode() {
        assert_eq!(render(&json!("猫")), "猫");
    }

    #[test]
    fn object_keys_keep_document_order() {
        let doc: Value = serde_json::from_str(r#"{"z": 1, "a": 2}"#).unwrap();
        assert_eq!(render(&doc), "{\n  \"z\": 1,\n  \"a\": 2\n}");
    }

    #[test]
    fn finds_nested_image_url_case_insensitively() {
        let doc = json!({"x": {"y": "http://e.com/p.PNG"}, "z": "no"});
        assert_eq!(find_image_url(&doc), Some("http://e.com/p.PNG"));
        assert_eq!(select(&doc).image_url, "http://e.com/p.PNG");
    }

    #[test]
    fn no_image_url_yields_empty() {
        let doc = json!({"x": ["http://e.com/page.html", 3, null], "y": "photo.jpg"});
        assert_eq!(select(&doc).image_url, "");
    }

    #[test]
    fn first_match_in_document_order_wins() {
        let doc = json!([
            {"thumb": "https://cdn.e.com/t.gif"},
            "https://cdn.e.com/full.jpeg"
        ]);
        assert_eq!(find_image_url(&doc), Some("https://cdn.e.com/t.gif"));
    }

    #[test]
    fn extension_may_appear_mid_string() {
        assert!(is_image_url("https://e.com/a.jpg?w=200"));
        assert!(is_image_url("http://e.com/img.png/raw"));
        assert!(!is_image_url("ftp://e.com/a.jpg"));
        assert!(!is_image_url("HTTP://e.com/a.jpg"));
    }

    #[test]
    fn scalar_selection_can_be_image_url() {
        let doc = json!({"cover": "https://e.com/c.jpg"});
        let selection = extract(&doc, "cover").unwrap();
        assert_eq!(selection.text, "https://e.com/c.jpg");
        assert_eq!(selection.image_url, "https://e.com/c.jpg");
    }
}
