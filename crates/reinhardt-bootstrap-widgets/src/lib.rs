//! # Reinhardt Bootstrap Widgets
//!
//! Bootstrap 4 widgets rendered to HTML strings.
//!
//! ## Widgets
//!
//! - [`Alert`]: alert box with an optional dismiss button
//! - [`Breadcrumbs`]: navigation trail
//!
//! Widgets are immutable configuration values built with consuming builder
//! methods or loaded from TOML/JSON ([`WidgetConfig`]). Rendering takes a
//! [`RenderContext`], which owns the auto-generated ID sequence and collects
//! the client plugin registrations of a page.
//!
//! ## Example
//!
//! ```
//! use reinhardt_bootstrap_widgets::{BreadcrumbLink, Breadcrumbs, RenderContext, Widget};
//!
//! let mut ctx = RenderContext::new();
//! let html = Breadcrumbs::new()
//!     .home_link(BreadcrumbLink::new("Home").url("#"))
//!     .links([BreadcrumbLink::new("Library").url("#"), BreadcrumbLink::new("Data")])
//!     .render(&mut ctx);
//!
//! assert_eq!(
//!     html,
//!     "<nav aria-label=\"breadcrumb\"><ol id=\"w0-breadcrumb\" class=\"breadcrumb\">\
//!      <li class=\"breadcrumb-item\"><a href=\"#\">Home</a></li>\n\
//!      <li class=\"breadcrumb-item\"><a href=\"#\">Library</a></li>\n\
//!      <li class=\"breadcrumb-item active\" aria-current=\"page\">Data</li>\n\
//!      </ol></nav>"
//! );
//! ```

pub mod alert;
pub mod breadcrumbs;
pub mod component;
pub mod config;
pub mod context;
pub mod error;
pub mod plugin;
pub mod sequence;

pub use alert::Alert;
pub use breadcrumbs::{BreadcrumbLink, Breadcrumbs, HomeLink};
pub use component::{Variant, Widget};
pub use config::{WidgetConfig, WidgetDocument};
pub use context::RenderContext;
pub use error::{ConfigError, Result};
pub use plugin::{ClientOptions, ClientScript};
pub use sequence::{AUTO_ID_PREFIX, IdSequence};
