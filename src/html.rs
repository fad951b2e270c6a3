//! HTML rendering primitives
//!
//! This module provides access to reinhardt-html, the attribute and tag
//! rendering layer every widget is built on.
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_bootstrap::html::{AttributeMap, ClassAddition, add_css_class, tag};
//!
//! let mut attrs = AttributeMap::new().with("type", "button");
//! add_css_class(&mut attrs, ClassAddition::group("widget", "btn"));
//! add_css_class(&mut attrs, "btn-primary");
//!
//! assert_eq!(
//!     tag("button", "Save", &attrs),
//!     r#"<button type="button" class="btn btn-primary">Save</button>"#
//! );
//! ```

// Re-export all reinhardt-html functionality
pub use reinhardt_html::*;
