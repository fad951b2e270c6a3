//! Escaping helpers for text content, attribute values and inline JSON.

use std::borrow::Cow;

/// Escapes HTML special characters in text content.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their entities. Returns a
/// borrowed reference if no escaping is needed.
///
/// # Examples
///
/// ```
/// use reinhardt_html::encode;
///
/// assert_eq!(encode("Library"), "Library");
/// assert_eq!(encode("Tom & Jerry"), "Tom &amp; Jerry");
/// assert_eq!(encode("<b>"), "&lt;b&gt;");
/// ```
pub fn encode(text: &str) -> Cow<'_, str> {
	html_escape::encode_quoted_attribute(text)
}

/// Escapes a value for use inside a quoted HTML attribute.
///
/// This is the escaping applied by [`render_tag_attributes`](crate::render_tag_attributes)
/// to every emitted value.
pub fn escape_attr(value: &str) -> Cow<'_, str> {
	html_escape::encode_quoted_attribute(value)
}

/// Serializes a JSON value so it can be embedded in a single-quoted
/// attribute or an inline `<script>`.
///
/// `<`, `>`, `&` and `'` only ever appear inside JSON string literals, so
/// they are rewritten to their `\uXXXX` forms without touching the JSON
/// structure.
///
/// # Examples
///
/// ```
/// use reinhardt_html::html_encode_json;
/// use serde_json::json;
///
/// assert_eq!(html_encode_json(&json!({"a": "<b>"})), r#"{"a":"\u003Cb\u003E"}"#);
/// ```
pub fn html_encode_json(value: &serde_json::Value) -> String {
	let raw = value.to_string();
	let mut out = String::with_capacity(raw.len());
	for ch in raw.chars() {
		match ch {
			'<' => out.push_str("\\u003C"),
			'>' => out.push_str("\\u003E"),
			'&' => out.push_str("\\u0026"),
			'\'' => out.push_str("\\u0027"),
			_ => out.push(ch),
		}
	}
	out
}
