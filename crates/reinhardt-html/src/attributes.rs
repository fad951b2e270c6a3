//! Attribute maps and attribute rendering.
//!
//! [`AttributeMap`] preserves insertion order, which is the order attributes
//! are emitted in. Widgets rely on this for byte-exact output, so they insert
//! `id` before `class` before everything else.
//!
//! ## Value rendering
//!
//! | Value | Output |
//! |---|---|
//! | `Bool(true)` | ` name` |
//! | `Bool(false)`, `Null` | nothing |
//! | `Str`, `Int`, `Float` | ` name="escaped"` |
//! | `List` | ` name="a b"` (space-joined) |
//! | `Class` or anything under `class` | deduplicated tokens, omitted when empty |
//! | `Map` under `data` / `aria` | one ` data-key="..."` per entry |
//! | `Map` under `style` | ` style="k: v; k2: v2;"` |
//! | other `Map` | ` name='{json}'` |

use std::fmt::Write as _;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::class::ClassList;
use crate::escape::{escape_attr, html_encode_json};

/// Attribute keys whose map values expand into prefixed attributes.
pub const DATA_ATTRIBUTES: &[&str] = &["aria", "data", "data-ng", "ng"];

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
	/// Omitted from output
	Null,
	/// HTML boolean attribute: present when `true`, omitted when `false`
	Bool(bool),
	/// Integer scalar
	Int(i64),
	/// Floating point scalar
	Float(f64),
	/// String scalar
	Str(String),
	/// Space-joined list
	List(Vec<String>),
	/// Nested map, interpreted according to the attribute name
	Map(IndexMap<String, AttrValue>),
	/// Merged class contributions, see [`crate::class`]
	#[serde(skip_deserializing)]
	Class(ClassList),
}

impl AttrValue {
	/// Returns the string slice for `Str` values.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Str(s) => Some(s),
			_ => None,
		}
	}

	/// Converts the value to JSON for embedding in `data-*` attributes or
	/// client scripts.
	pub fn to_json(&self) -> serde_json::Value {
		use serde_json::Value;
		match self {
			Self::Null => Value::Null,
			Self::Bool(b) => Value::Bool(*b),
			Self::Int(n) => Value::from(*n),
			Self::Float(n) => Value::from(*n),
			Self::Str(s) => Value::String(s.clone()),
			Self::List(items) => Value::Array(items.iter().cloned().map(Value::String).collect()),
			Self::Map(map) => Value::Object(
				map.iter()
					.map(|(k, v)| (k.clone(), v.to_json()))
					.collect(),
			),
			Self::Class(list) => Value::String(list.to_class_string()),
		}
	}

	/// Renders scalar and list values to the string placed between quotes.
	///
	/// Returns `None` for `Null`, booleans and maps, which have no single
	/// string form.
	pub fn to_value_string(&self) -> Option<String> {
		match self {
			Self::Str(s) => Some(s.clone()),
			Self::Int(n) => Some(n.to_string()),
			Self::Float(n) => Some(n.to_string()),
			Self::List(items) => Some(items.join(" ")),
			Self::Class(list) => Some(list.to_class_string()),
			Self::Null | Self::Bool(_) | Self::Map(_) => None,
		}
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		Self::Str(value.to_owned())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}

impl From<&String> for AttrValue {
	fn from(value: &String) -> Self {
		Self::Str(value.clone())
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for AttrValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<i32> for AttrValue {
	fn from(value: i32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<f64> for AttrValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<Vec<String>> for AttrValue {
	fn from(value: Vec<String>) -> Self {
		Self::List(value)
	}
}

impl From<Vec<&str>> for AttrValue {
	fn from(value: Vec<&str>) -> Self {
		Self::List(value.into_iter().map(str::to_owned).collect())
	}
}

impl From<ClassList> for AttrValue {
	fn from(value: ClassList) -> Self {
		Self::Class(value)
	}
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

impl<K, V> FromIterator<(K, V)> for AttrValue
where
	K: Into<String>,
	V: Into<AttrValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self::Map(
			iter.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		)
	}
}

/// Insertion-ordered attribute map.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct AttributeMap {
	inner: IndexMap<String, AttrValue>,
}

impl AttributeMap {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts or replaces an attribute. A replaced attribute keeps its
	/// original position.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
		self.inner.insert(name.into(), value.into());
	}

	/// Builder form of [`insert`](Self::insert).
	pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.insert(name, value);
		self
	}

	/// Inserts only if the attribute is absent.
	pub fn insert_default(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
		self.inner.entry(name.into()).or_insert_with(|| value.into());
	}

	/// Returns the value for `name`.
	pub fn get(&self, name: &str) -> Option<&AttrValue> {
		self.inner.get(name)
	}

	/// Returns the value for `name` when it is a string.
	pub fn get_str(&self, name: &str) -> Option<&str> {
		self.get(name).and_then(AttrValue::as_str)
	}

	/// Returns whether `name` is present.
	pub fn contains_key(&self, name: &str) -> bool {
		self.inner.contains_key(name)
	}

	/// Removes `name`, preserving the order of the remaining attributes.
	pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
		self.inner.shift_remove(name)
	}

	/// Attribute names in emission order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.inner.keys().map(String::as_str)
	}

	/// Attributes in emission order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
		self.inner.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Number of attributes.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Returns `true` if there are no attributes.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Rendered value of the `class` attribute, if any.
	pub fn class_string(&self) -> Option<String> {
		self.get("class")
			.map(|v| ClassList::from_value(v).to_class_string())
	}

	/// Returns a copy with `name` placed before the existing attributes.
	///
	/// An existing attribute of the same name is replaced.
	pub fn prepend(&self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		let name = name.into();
		let mut inner = IndexMap::with_capacity(self.inner.len() + 1);
		inner.insert(name.clone(), value.into());
		for (k, v) in &self.inner {
			if *k != name {
				inner.insert(k.clone(), v.clone());
			}
		}
		Self { inner }
	}
}

impl<K, V> FromIterator<(K, V)> for AttributeMap
where
	K: Into<String>,
	V: Into<AttrValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut map = Self::new();
		for (k, v) in iter {
			map.insert(k, v);
		}
		map
	}
}

impl<'a> IntoIterator for &'a AttributeMap {
	type Item = (&'a String, &'a AttrValue);
	type IntoIter = indexmap::map::Iter<'a, String, AttrValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.inner.iter()
	}
}

/// Renders attributes as they appear inside a start tag.
///
/// Each emitted attribute is preceded by a single space, so the result can be
/// appended directly after the tag name. An empty map renders as `""`.
///
/// # Examples
///
/// ```
/// use reinhardt_html::{AttributeMap, render_tag_attributes};
///
/// let attrs = AttributeMap::new()
///     .with("type", "checkbox")
///     .with("checked", true)
///     .with("disabled", false)
///     .with("value", "a&b");
///
/// assert_eq!(render_tag_attributes(&attrs), r#" type="checkbox" checked value="a&amp;b""#);
/// assert_eq!(render_tag_attributes(&AttributeMap::new()), "");
/// ```
pub fn render_tag_attributes(attrs: &AttributeMap) -> String {
	let mut html = String::new();
	for (name, value) in attrs.iter() {
		render_attribute(&mut html, name, value);
	}
	html
}

fn render_attribute(html: &mut String, name: &str, value: &AttrValue) {
	match value {
		_ if name == "class" => {
			let classes = ClassList::from_value(value);
			if !classes.is_empty() {
				push_quoted(html, name, &classes.to_class_string());
			}
		}
		AttrValue::Null | AttrValue::Bool(false) => {}
		AttrValue::Bool(true) => {
			html.push(' ');
			html.push_str(name);
		}
		AttrValue::Map(map) if DATA_ATTRIBUTES.contains(&name) => {
			for (key, item) in map {
				let prefixed = format!("{name}-{key}");
				match item {
					AttrValue::Map(_) | AttrValue::List(_) => {
						push_json(html, &prefixed, &item.to_json());
					}
					other => render_attribute(html, &prefixed, other),
				}
			}
		}
		AttrValue::Map(map) if name == "style" => {
			let style = map
				.iter()
				.filter_map(|(prop, v)| v.to_value_string().map(|v| format!("{prop}: {v};")))
				.collect::<Vec<_>>()
				.join(" ");
			if !style.is_empty() {
				push_quoted(html, name, &style);
			}
		}
		AttrValue::Map(_) => push_json(html, name, &value.to_json()),
		scalar => {
			if let Some(s) = scalar.to_value_string() {
				push_quoted(html, name, &s);
			}
		}
	}
}

fn push_quoted(html: &mut String, name: &str, value: &str) {
	let _ = write!(html, " {}=\"{}\"", name, escape_attr(value));
}

fn push_json(html: &mut String, name: &str, value: &serde_json::Value) {
	let _ = write!(html, " {}='{}'", name, html_encode_json(value));
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::class::{ClassAddition, add_css_class};
	use rstest::rstest;

	#[rstest]
	fn test_empty_map_renders_nothing() {
		assert_eq!(render_tag_attributes(&AttributeMap::new()), "");
	}

	#[rstest]
	fn test_only_omitted_attributes_render_nothing() {
		let attrs = AttributeMap::new()
			.with("hidden", false)
			.with("title", AttrValue::Null);
		assert_eq!(render_tag_attributes(&attrs), "");
	}

	#[rstest]
	#[case(true, " disabled")]
	#[case(false, "")]
	fn test_boolean_attribute(#[case] value: bool, #[case] expected: &str) {
		let attrs = AttributeMap::new().with("disabled", value);
		assert_eq!(render_tag_attributes(&attrs), expected);
	}

	#[rstest]
	fn test_insertion_order_is_emission_order() {
		let attrs = AttributeMap::new()
			.with("role", "alert")
			.with("id", "w0")
			.with("tabindex", 2);
		assert_eq!(
			render_tag_attributes(&attrs),
			r#" role="alert" id="w0" tabindex="2""#
		);
	}

	#[rstest]
	fn test_list_attribute_is_space_joined() {
		let attrs = AttributeMap::new().with("rel", vec!["noopener", "noreferrer"]);
		assert_eq!(render_tag_attributes(&attrs), r#" rel="noopener noreferrer""#);
	}

	#[rstest]
	fn test_class_list_is_deduplicated() {
		let attrs = AttributeMap::new().with("class", vec!["a", "b", "a"]);
		assert_eq!(render_tag_attributes(&attrs), r#" class="a b""#);
	}

	#[rstest]
	fn test_empty_class_is_omitted() {
		let attrs = AttributeMap::new()
			.with("class", Vec::<String>::new())
			.with("id", "x");
		assert_eq!(render_tag_attributes(&attrs), r#" id="x""#);
	}

	#[rstest]
	#[case(true)]
	#[case(false)]
	fn test_boolean_class_is_omitted(#[case] value: bool) {
		let attrs = AttributeMap::new().with("class", value).with("id", "x");
		assert_eq!(render_tag_attributes(&attrs), r#" id="x""#);
	}

	#[rstest]
	fn test_values_are_escaped() {
		let attrs = AttributeMap::new().with("title", r#""><script>alert(1)</script>"#);
		let html = render_tag_attributes(&attrs);
		assert_eq!(
			html,
			r#" title="&quot;&gt;&lt;script&gt;alert(1)&lt;/script&gt;""#
		);
	}

	#[rstest]
	fn test_data_map_expands() {
		let data: AttrValue = [
			("toggle", AttrValue::from("collapse")),
			("active", AttrValue::from(true)),
			("skip", AttrValue::from(false)),
		]
		.into_iter()
		.collect();
		let attrs = AttributeMap::new().with("data", data);
		assert_eq!(
			render_tag_attributes(&attrs),
			r#" data-toggle="collapse" data-active"#
		);
	}

	#[rstest]
	fn test_nested_data_is_json_encoded() {
		let nested: AttrValue = [("delay", 100)].into_iter().collect();
		let data: AttrValue = [("options", nested)].into_iter().collect();
		let attrs = AttributeMap::new().with("data", data);
		assert_eq!(
			render_tag_attributes(&attrs),
			r#" data-options='{"delay":100}'"#
		);
	}

	#[rstest]
	fn test_aria_map_expands() {
		let aria: AttrValue = [("hidden", "true")].into_iter().collect();
		let attrs = AttributeMap::new().with("aria", aria);
		assert_eq!(render_tag_attributes(&attrs), r#" aria-hidden="true""#);
	}

	#[rstest]
	fn test_style_map() {
		let style: AttrValue = [("width", "100px"), ("height", "20px")].into_iter().collect();
		let attrs = AttributeMap::new().with("style", style);
		assert_eq!(
			render_tag_attributes(&attrs),
			r#" style="width: 100px; height: 20px;""#
		);
	}

	#[rstest]
	fn test_class_groups_render_in_place() {
		let mut attrs = AttributeMap::new().with("id", "w0-breadcrumb");
		add_css_class(&mut attrs, ClassAddition::group("widget", "breadcrumb"));
		attrs.insert("role", "navigation");
		assert_eq!(
			render_tag_attributes(&attrs),
			r#" id="w0-breadcrumb" class="breadcrumb" role="navigation""#
		);
	}

	#[rstest]
	fn test_replace_keeps_position() {
		let mut attrs = AttributeMap::new().with("a", "1").with("b", "2");
		attrs.insert("a", "3");
		assert_eq!(render_tag_attributes(&attrs), r#" a="3" b="2""#);
	}

	#[rstest]
	fn test_insert_default_does_not_override() {
		let mut attrs = AttributeMap::new().with("role", "status");
		attrs.insert_default("role", "alert");
		assert_eq!(attrs.get_str("role"), Some("status"));
	}

	#[rstest]
	fn test_prepend_moves_attribute_first() {
		let attrs = AttributeMap::new().with("class", "x").with("href", "/old");
		let moved = attrs.prepend("href", "/new");
		let keys: Vec<&str> = moved.keys().collect();
		assert_eq!(keys, vec!["href", "class"]);
		assert_eq!(moved.get_str("href"), Some("/new"));
	}

	#[rstest]
	fn test_deserialize_from_toml() {
		let attrs: AttributeMap = toml::from_str(
			r#"
			id = "main"
			hidden = true
			tabindex = 3
			rel = ["a", "b"]

			[data]
			toggle = "tab"
			"#,
		)
		.unwrap();
		assert_eq!(
			render_tag_attributes(&attrs),
			r#" id="main" hidden tabindex="3" rel="a b" data-toggle="tab""#
		);
	}
}
