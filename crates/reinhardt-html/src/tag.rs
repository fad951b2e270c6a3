//! Tag building.
//!
//! The plain functions trust their input: tag names are emitted as given.
//! Use [`try_open_tag`] or [`RenderedTag::try_new`] when names come from
//! configuration that has not been checked.

use crate::attributes::{AttrValue, AttributeMap, DATA_ATTRIBUTES, render_tag_attributes};
use crate::error::{HtmlError, Result};

/// Elements that never have content or a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

/// Returns whether `name` is a void element.
pub fn is_void_element(name: &str) -> bool {
	VOID_ELEMENTS.contains(&name.to_ascii_lowercase().as_str())
}

/// Renders a start tag: `<name` + attributes + `>`.
///
/// # Examples
///
/// ```
/// use reinhardt_html::{AttributeMap, open_tag};
///
/// assert_eq!(open_tag("ol", &AttributeMap::new()), "<ol>");
/// assert_eq!(
///     open_tag("nav", &AttributeMap::new().with("aria-label", "breadcrumb")),
///     r#"<nav aria-label="breadcrumb">"#
/// );
/// ```
pub fn open_tag(name: &str, attrs: &AttributeMap) -> String {
	format!("<{}{}>", name, render_tag_attributes(attrs))
}

/// Renders an end tag: `</name>`.
pub fn close_tag(name: &str) -> String {
	format!("</{}>", name)
}

/// Renders a complete element.
///
/// `content` is inserted as-is; escape it first if it is text. Void elements
/// ignore `content` and have no end tag.
pub fn tag(name: &str, content: &str, attrs: &AttributeMap) -> String {
	if is_void_element(name) {
		return open_tag(name, attrs);
	}
	let mut html = open_tag(name, attrs);
	html.push_str(content);
	html.push_str(&close_tag(name));
	html
}

/// Renders an anchor with `href` as the first attribute.
///
/// `label` is inserted as-is.
pub fn a(label: &str, url: &str, attrs: &AttributeMap) -> String {
	tag("a", label, &attrs.prepend("href", url))
}

/// Validating form of [`open_tag`].
///
/// Rejects illegal tag names and attribute names, including the expanded
/// names produced by `data`/`aria` maps.
pub fn try_open_tag(name: &str, attrs: &AttributeMap) -> Result<String> {
	validate_tag_name(name)?;
	validate_attribute_names(attrs)?;
	Ok(open_tag(name, attrs))
}

/// Checks that `name` is an ASCII letter followed by ASCII alphanumerics or
/// hyphens.
pub fn validate_tag_name(name: &str) -> Result<()> {
	let mut chars = name.chars();
	let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
		&& chars.all(|c| c.is_ascii_alphanumeric() || c == '-');
	if valid {
		Ok(())
	} else {
		tracing::warn!(tag = name, "rejected tag name");
		Err(HtmlError::InvalidTagName(name.to_owned()))
	}
}

/// Checks that `name` is a legal attribute name.
///
/// Attribute names may not be empty and may not contain whitespace, control
/// characters, quotes, `>`, `/` or `=`.
pub fn validate_attribute_name(name: &str) -> Result<()> {
	let valid = !name.is_empty()
		&& !name.chars().any(|c| {
			c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '/' | '=' | '<')
		});
	if valid {
		Ok(())
	} else {
		tracing::warn!(attribute = name, "rejected attribute name");
		Err(HtmlError::InvalidAttributeName(name.to_owned()))
	}
}

fn validate_attribute_names(attrs: &AttributeMap) -> Result<()> {
	for (name, value) in attrs.iter() {
		validate_attribute_name(name)?;
		if let AttrValue::Map(map) = value
			&& DATA_ATTRIBUTES.contains(&name)
		{
			for key in map.keys() {
				validate_attribute_name(&format!("{name}-{key}"))?;
			}
		}
	}
	Ok(())
}

/// An immutable open/close tag pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTag {
	name: String,
	open: String,
	close: String,
}

impl RenderedTag {
	/// Renders the tag pair without validation.
	pub fn new(name: impl Into<String>, attrs: &AttributeMap) -> Self {
		let name = name.into();
		let open = open_tag(&name, attrs);
		let close = if is_void_element(&name) {
			String::new()
		} else {
			close_tag(&name)
		};
		Self { name, open, close }
	}

	/// Renders the tag pair after validating tag and attribute names.
	pub fn try_new(name: impl Into<String>, attrs: &AttributeMap) -> Result<Self> {
		let name = name.into();
		validate_tag_name(&name)?;
		validate_attribute_names(attrs)?;
		Ok(Self::new(name, attrs))
	}

	/// Tag name used for the end tag.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Start tag markup.
	pub fn open(&self) -> &str {
		&self.open
	}

	/// End tag markup. Empty for void elements.
	pub fn close(&self) -> &str {
		&self.close
	}

	/// Wraps `content` in the tag pair.
	pub fn wrap(&self, content: &str) -> String {
		let mut html = String::with_capacity(self.open.len() + content.len() + self.close.len());
		html.push_str(&self.open);
		html.push_str(content);
		html.push_str(&self.close);
		html
	}
}
