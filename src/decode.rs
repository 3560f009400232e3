//! Escape-sequence decoding for text that arrives double-encoded.
//!
//! Handles three forms, applied in this order over the whole string:
//!
//! | Form | Example |
//! |------|---------|
//! | JSON/JS escape | `\u4f60` |
//! | hex HTML entity | `&#x4f60;` |
//! | decimal HTML entity | `&#22909;` |
//!
//! Named entities (`&amp;`) are not recognized. Anything that doesn't match,
//! or names a code point that isn't a Unicode scalar value, is left as is.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static UNICODE_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\u([dD][89abAB][0-9a-fA-F]{2})\\u([dD][c-fC-F][0-9a-fA-F]{2})|\\u([0-9a-fA-F]{4})")
        .unwrap()
});
static HEX_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#x([0-9a-fA-F]+);").unwrap());
static DECIMAL_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#([0-9]+);").unwrap());

/// Resolve `\uXXXX`, `&#xH+;` and `&#D+;` escapes to literal characters.
#[must_use]
pub fn decode_escapes(input: &str) -> String {
    let decoded = UNICODE_ESCAPE.replace_all(input, |caps: &Captures| {
        let c = match (caps.get(1), caps.get(2)) {
            (Some(high), Some(low)) => surrogate_pair(high.as_str(), low.as_str()),
            _ => char_from_radix(&caps[3], 16),
        };
        replacement(c, caps)
    });

    let decoded = HEX_ENTITY.replace_all(&decoded, |caps: &Captures| {
        replacement(char_from_radix(&caps[1], 16), caps)
    });

    DECIMAL_ENTITY
        .replace_all(&decoded, |caps: &Captures| {
            replacement(char_from_radix(&caps[1], 10), caps)
        })
        .into_owned()
}

fn replacement(c: Option<char>, caps: &Captures) -> String {
    c.map_or_else(|| caps[0].to_string(), String::from)
}

fn char_from_radix(digits: &str, radix: u32) -> Option<char> {
    u32::from_str_radix(digits, radix)
        .ok()
        .and_then(char::from_u32)
}

fn surrogate_pair(high: &str, low: &str) -> Option<char> {
    let high = u16::from_str_radix(high, 16).ok()?;
    let low = u16::from_str_radix(low, 16).ok()?;
    char::decode_utf16([high, low]).next()?.ok()
}
