//! Text helpers shared by the tile builder and the backends.
//! Escaping for markup, display-only URL shortening, absolute URL detection.
//! All functions are pure; nothing here knows which backend is drawing.

use reqwest::Url;

const META_MAX_CHARS: usize = 36; // Longer urls get shortened in the meta line
const META_KEEP_CHARS: usize = 34;
const ELLIPSIS: char = '…';

/// Replaces the five HTML-sensitive characters with their entities.
/// Safe for both element text and quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Shortens a url for display. The original string is still used for navigation.
/// Lengths count Unicode scalar values, so multi-byte hosts are never split.
pub fn pretty_url(url: &str) -> String {
    if url.chars().count() > META_MAX_CHARS {
        let mut short: String = url.chars().take(META_KEEP_CHARS).collect();
        short.push(ELLIPSIS);
        short
    } else {
        url.to_string()
    }
}

/// True when `candidate` parses as an absolute URL (any scheme).
pub fn is_absolute_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok()
}
