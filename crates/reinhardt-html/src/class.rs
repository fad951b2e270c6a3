//! CSS class merging.
//!
//! A `class` attribute is built from contributions. A contribution is either
//! unconditional (plain tokens) or keyed by a logical group such as
//! `"widget"`, which lets a widget later withdraw exactly what it added
//! without touching the caller's classes.
//!
//! ```
//! use reinhardt_html::{AttributeMap, ClassAddition, add_css_class, remove_css_class_group, render_tag_attributes};
//!
//! let mut attrs = AttributeMap::new();
//! add_css_class(&mut attrs, ClassAddition::group("widget", "alert"));
//! add_css_class(&mut attrs, ClassAddition::group("alert-dismissible", "alert-dismissible"));
//! remove_css_class_group(&mut attrs, "alert-dismissible");
//!
//! assert_eq!(render_tag_attributes(&attrs), r#" class="alert""#);
//! ```

use crate::attributes::{AttrValue, AttributeMap};

const CLASS: &str = "class";

#[derive(Debug, Clone, PartialEq, Eq)]
struct ClassEntry {
	group: Option<String>,
	tokens: Vec<String>,
}

/// Ordered set of class contributions backing a `class` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
	entries: Vec<ClassEntry>,
}

impl ClassList {
	/// Creates an empty class list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a class list from an existing `class` attribute value.
	///
	/// Strings are split on whitespace, lists contribute each item, and maps
	/// contribute one keyed group per entry.
	pub fn from_value(value: &AttrValue) -> Self {
		let mut list = Self::new();
		match value {
			AttrValue::Class(existing) => return existing.clone(),
			AttrValue::Str(s) => list.add_tokens(split_tokens(s)),
			AttrValue::List(items) => {
				list.add_tokens(items.iter().flat_map(|item| split_tokens(item)));
			}
			AttrValue::Map(groups) => {
				for (key, group) in groups {
					list.add_group(key.clone(), tokens_of(group));
				}
			}
			AttrValue::Int(n) => list.add_tokens([n.to_string()]),
			AttrValue::Float(n) => list.add_tokens([n.to_string()]),
			AttrValue::Null | AttrValue::Bool(_) => {}
		}
		list
	}

	/// Adds unconditional tokens, skipping any already present.
	pub fn add_tokens<I, S>(&mut self, tokens: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		for token in tokens {
			let token = token.into();
			if token.is_empty() || self.contains(&token) {
				continue;
			}
			match self.entries.last_mut() {
				Some(entry) if entry.group.is_none() => entry.tokens.push(token),
				_ => self.entries.push(ClassEntry {
					group: None,
					tokens: vec![token],
				}),
			}
		}
	}

	/// Adds a keyed group of tokens.
	///
	/// If the group key is already present the existing contribution wins and
	/// the new tokens are ignored.
	pub fn add_group<I, S>(&mut self, key: impl Into<String>, tokens: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let key = key.into();
		if self.has_group(&key) {
			return;
		}
		let tokens = tokens
			.into_iter()
			.map(Into::into)
			.filter(|t: &String| !t.is_empty())
			.collect();
		self.entries.push(ClassEntry {
			group: Some(key),
			tokens,
		});
	}

	/// Applies a [`ClassAddition`] in order.
	pub fn merge(&mut self, addition: ClassAddition) {
		for part in addition.parts {
			match part {
				AdditionPart::Tokens(tokens) => self.add_tokens(tokens),
				AdditionPart::Group(key, tokens) => self.add_group(key, tokens),
			}
		}
	}

	/// Removes the contribution registered under `key`.
	///
	/// Returns `false` when no such group exists.
	pub fn remove_group(&mut self, key: &str) -> bool {
		let before = self.entries.len();
		self.entries.retain(|e| e.group.as_deref() != Some(key));
		before != self.entries.len()
	}

	/// Removes `token` from every contribution.
	///
	/// Returns `false` when the token was not present.
	pub fn remove_token(&mut self, token: &str) -> bool {
		let mut removed = false;
		for entry in &mut self.entries {
			let before = entry.tokens.len();
			entry.tokens.retain(|t| t != token);
			removed |= before != entry.tokens.len();
		}
		self.entries
			.retain(|e| e.group.is_some() || !e.tokens.is_empty());
		removed
	}

	/// Returns whether `token` is contributed by any group.
	pub fn contains(&self, token: &str) -> bool {
		self.entries
			.iter()
			.any(|e| e.tokens.iter().any(|t| t == token))
	}

	/// Returns whether a group with the given key exists.
	pub fn has_group(&self, key: &str) -> bool {
		self.entries.iter().any(|e| e.group.as_deref() == Some(key))
	}

	/// Distinct tokens in order of first appearance.
	pub fn tokens(&self) -> Vec<&str> {
		let mut seen: Vec<&str> = Vec::new();
		for token in self.entries.iter().flat_map(|e| e.tokens.iter()) {
			if !seen.contains(&token.as_str()) {
				seen.push(token);
			}
		}
		seen
	}

	/// Returns `true` when no token would be rendered.
	pub fn is_empty(&self) -> bool {
		self.entries.iter().all(|e| e.tokens.is_empty())
	}

	/// Space-joined distinct tokens, ready for a `class` attribute.
	pub fn to_class_string(&self) -> String {
		self.tokens().join(" ")
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AdditionPart {
	Tokens(Vec<String>),
	Group(String, Vec<String>),
}

/// Classes to merge into an attribute map.
///
/// Plain strings and lists convert into unconditional tokens; use
/// [`ClassAddition::group`] for contributions that should be removable by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassAddition {
	parts: Vec<AdditionPart>,
}

impl ClassAddition {
	/// Unconditional tokens. Each item is split on whitespace.
	pub fn tokens<I, S>(tokens: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self::default().and_tokens(tokens)
	}

	/// A keyed group. `tokens` is split on whitespace.
	pub fn group(key: impl Into<String>, tokens: &str) -> Self {
		Self::default().and_group(key, tokens)
	}

	/// Appends unconditional tokens.
	pub fn and_tokens<I, S>(mut self, tokens: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let tokens = tokens
			.into_iter()
			.flat_map(|t| split_tokens(t.as_ref()))
			.collect();
		self.parts.push(AdditionPart::Tokens(tokens));
		self
	}

	/// Appends a keyed group.
	pub fn and_group(mut self, key: impl Into<String>, tokens: &str) -> Self {
		self.parts
			.push(AdditionPart::Group(key.into(), split_tokens(tokens)));
		self
	}
}

impl From<&str> for ClassAddition {
	fn from(tokens: &str) -> Self {
		Self::tokens([tokens])
	}
}

impl From<String> for ClassAddition {
	fn from(tokens: String) -> Self {
		Self::tokens([tokens])
	}
}

impl From<Vec<&str>> for ClassAddition {
	fn from(tokens: Vec<&str>) -> Self {
		Self::tokens(tokens)
	}
}

impl From<Vec<String>> for ClassAddition {
	fn from(tokens: Vec<String>) -> Self {
		Self::tokens(tokens)
	}
}

impl<const N: usize> From<[&str; N]> for ClassAddition {
	fn from(tokens: [&str; N]) -> Self {
		Self::tokens(tokens)
	}
}

/// Merges classes into the `class` attribute of `attrs`.
///
/// The `class` attribute keeps its position if it already exists and is
/// appended otherwise. Tokens already present are not duplicated.
pub fn add_css_class(attrs: &mut AttributeMap, addition: impl Into<ClassAddition>) {
	let mut list = attrs
		.get(CLASS)
		.map(ClassList::from_value)
		.unwrap_or_default();
	list.merge(addition.into());
	attrs.insert(CLASS, AttrValue::Class(list));
}

/// Removes the class contribution registered under `key`.
///
/// Unknown keys leave `attrs` untouched. When nothing is left the `class`
/// attribute is removed.
pub fn remove_css_class_group(attrs: &mut AttributeMap, key: &str) {
	let Some(value) = attrs.get(CLASS) else {
		tracing::trace!(key, "no class attribute, group removal skipped");
		return;
	};
	let mut list = ClassList::from_value(value);
	if !list.remove_group(key) {
		tracing::trace!(key, "class group not present, removal skipped");
		return;
	}
	store(attrs, list);
}

/// Removes `token` from the `class` attribute wherever it was contributed.
pub fn remove_css_class(attrs: &mut AttributeMap, token: &str) {
	let Some(value) = attrs.get(CLASS) else {
		return;
	};
	let mut list = ClassList::from_value(value);
	if list.remove_token(token) {
		store(attrs, list);
	}
}

/// Returns whether the `class` attribute of `attrs` contains `token`.
pub fn has_css_class(attrs: &AttributeMap, token: &str) -> bool {
	attrs
		.get(CLASS)
		.is_some_and(|value| ClassList::from_value(value).contains(token))
}

fn store(attrs: &mut AttributeMap, list: ClassList) {
	if list.is_empty() {
		attrs.remove(CLASS);
	} else {
		attrs.insert(CLASS, AttrValue::Class(list));
	}
}

fn split_tokens(s: &str) -> Vec<String> {
	s.split_whitespace().map(str::to_owned).collect()
}

fn tokens_of(value: &AttrValue) -> Vec<String> {
	match value {
		AttrValue::Str(s) => split_tokens(s),
		AttrValue::List(items) => items.iter().flat_map(|i| split_tokens(i)).collect(),
		other => ClassList::from_value(other)
			.tokens()
			.into_iter()
			.map(str::to_owned)
			.collect(),
	}
}
