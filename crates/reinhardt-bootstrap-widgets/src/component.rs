//! Core widget trait and common types

use serde::Deserialize;

use crate::context::RenderContext;

/// Widget trait - base interface for all Bootstrap widgets
///
/// A widget is an immutable configuration value. Rendering reads the
/// configuration and the [`RenderContext`]; it never mutates the widget.
pub trait Widget: Send + Sync {
	/// Returns the widget's type name
	///
	/// The name scopes the widget's auto-generated ID counter, so every
	/// widget type numbers its instances independently.
	fn name(&self) -> &'static str;

	/// Renders the widget to an HTML string
	fn render(&self, ctx: &mut RenderContext) -> String;

	/// Renders the widget with a fresh context
	///
	/// Auto-generated IDs start from zero and registered client scripts are
	/// discarded.
	fn render_default(&self) -> String {
		self.render(&mut RenderContext::new())
	}
}

impl<W: Widget + ?Sized> Widget for Box<W> {
	fn name(&self) -> &'static str {
		(**self).name()
	}

	fn render(&self, ctx: &mut RenderContext) -> String {
		(**self).render(ctx)
	}
}

/// Contextual color variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
	/// Primary color (default blue)
	Primary,
	/// Secondary color (default gray)
	Secondary,
	/// Success color (default green)
	Success,
	/// Danger color (default red)
	Danger,
	/// Warning color (default yellow)
	Warning,
	/// Info color (default cyan)
	Info,
	/// Light color (default light gray)
	Light,
	/// Dark color (default dark gray)
	Dark,
}

impl Variant {
	/// Convert variant to CSS class suffix
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Primary => "primary",
			Self::Secondary => "secondary",
			Self::Success => "success",
			Self::Danger => "danger",
			Self::Warning => "warning",
			Self::Info => "info",
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}

	/// CSS class for a component prefix, e.g. `alert-info`
	pub fn class_for(&self, component: &str) -> String {
		format!("{}-{}", component, self.as_str())
	}
}
