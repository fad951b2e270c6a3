//! # Reinhardt HTML
//!
//! Low-level HTML building blocks shared by the Reinhardt Bootstrap widgets.
//!
//! ## Overview
//!
//! Every widget renders through the same three primitives:
//!
//! - [`class`]: merges CSS class contributions into a single `class` value,
//!   deduplicating tokens and allowing keyed groups to be removed later
//! - [`attributes`]: renders an insertion-ordered [`AttributeMap`] into an
//!   escaped attribute string
//! - [`tag`]: composes open/close tags from a tag name and an attribute map
//!
//! ## Example
//!
//! ```
//! use reinhardt_html::{AttributeMap, ClassAddition, add_css_class, open_tag, close_tag};
//!
//! let mut attrs = AttributeMap::new();
//! attrs.insert("id", "w0-alert");
//! add_css_class(&mut attrs, ClassAddition::group("widget", "alert"));
//! add_css_class(&mut attrs, "alert-dismissible");
//!
//! let html = format!("{}Hello{}", open_tag("div", &attrs), close_tag("div"));
//! assert_eq!(html, r#"<div id="w0-alert" class="alert alert-dismissible">Hello</div>"#);
//! ```

pub mod attributes;
pub mod class;
pub mod error;
pub mod escape;
pub mod tag;

pub use attributes::{AttrValue, AttributeMap, render_tag_attributes};
pub use class::{
	ClassAddition, ClassList, add_css_class, has_css_class, remove_css_class,
	remove_css_class_group,
};
pub use error::{HtmlError, Result};
pub use escape::{encode, escape_attr, html_encode_json};
pub use tag::{
	RenderedTag, VOID_ELEMENTS, a, close_tag, is_void_element, open_tag, tag, try_open_tag,
	validate_attribute_name, validate_tag_name,
};
