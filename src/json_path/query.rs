//! Query-parameter blocks.
//!
//! A query block is free text with one `key=value` pair per line. Lines
//! without `=` are skipped, keys and values are trimmed, and a repeated key
//! overwrites the earlier value.

use url::form_urlencoded;

/// Parse a `key=value` block into ordered, de-duplicated pairs.
#[must_use]
pub fn parse_query_block(block: &str) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = Vec::new();

    for line in block.split('\n') {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());

        match params.iter_mut().find(|(k, _)| k == key) {
            Some(existing) => existing.1 = value.to_string(),
            None => params.push((key.to_string(), value.to_string())),
        }
    }

    params
}

/// Append the form-urlencoded `params` to `base`.
///
/// Uses `&` when `base` already carries a query string.
#[must_use]
pub fn build_url(base: &str, params: &[(String, String)]) -> String {
    if params.is_empty() {
        return base.to_string();
    }

    let encoded = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish();

    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}{encoded}")
}
