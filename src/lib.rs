//! # Reinhardt Bootstrap
//!
//! Bootstrap 4 widgets for Reinhardt, rendered to HTML strings.
//!
//! This crate is a facade over:
//!
//! - [`html`]: attribute maps, CSS class merging, tag building and escaping
//! - [`widgets`]: the [`Alert`](widgets::Alert) and
//!   [`Breadcrumbs`](widgets::Breadcrumbs) widgets, the render context and
//!   configuration loading (`widgets` feature, enabled by default)
//!
//! ## Feature Flags
//!
//! - `widgets` (default) - Bootstrap widgets and TOML/JSON widget configuration
//!
//! ## Quick Example
//!
//! ```rust
//! use reinhardt_bootstrap::prelude::*;
//!
//! let mut ctx = RenderContext::new();
//! let html = Alert::new()
//!     .options(AttributeMap::new().with("class", "alert-warning"))
//!     .body("Check your input.")
//!     .close_button_enabled(false)
//!     .render(&mut ctx);
//!
//! assert_eq!(
//!     html,
//!     "<div id=\"w0-alert\" class=\"alert-warning alert\" role=\"alert\">\n\nCheck your input.\n\n\n</div>"
//! );
//! ```

pub mod html;
#[cfg(feature = "widgets")]
pub mod widgets;

/// Commonly used types
pub mod prelude {
	pub use crate::html::{
		AttrValue, AttributeMap, ClassAddition, add_css_class, close_tag, open_tag,
		remove_css_class_group, render_tag_attributes, tag,
	};

	#[cfg(feature = "widgets")]
	pub use crate::widgets::{
		Alert, BreadcrumbLink, Breadcrumbs, ClientOptions, HomeLink, IdSequence, RenderContext,
		Variant, Widget, WidgetConfig, WidgetDocument,
	};
}
