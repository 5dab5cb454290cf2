//! HTML generation utilities.

use std::collections::BTreeMap;

/// Escapes a string for use in HTML text and attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Reverses [`escape_html`].
pub fn unescape_html(s: &str) -> String {
    s.replace("&#x27;", "'")
        .replace("&quot;", "\"")
        .replace("&gt;", ">")
        .replace("&lt;", "<")
        .replace("&amp;", "&")
}

/// Renders ` key="value"` pairs in key order.
pub fn attrs_to_html(attrs: &BTreeMap<String, String>) -> String {
    attrs
        .iter()
        .map(|(key, value)| format!(r#" {}="{}""#, escape_html(key), escape_html(value)))
        .collect::<Vec<_>>()
        .join("")
}

/// Wraps already-escaped content in a table cell.
pub(crate) fn td(content: &str) -> String {
    format!("<td>{}</td>", content)
}
