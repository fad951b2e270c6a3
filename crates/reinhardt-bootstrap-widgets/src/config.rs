//! Widget configuration loading
//!
//! Widgets can be declared in TOML or JSON and rendered through the same
//! [`Widget`] trait as builder-constructed ones.
//!
//! ```toml
//! [[widgets]]
//! type = "breadcrumbs"
//! home_link = { label = "Home", url = "#" }
//! links = [{ label = "Library", url = "#" }, "Data"]
//!
//! [[widgets]]
//! type = "alert"
//! body = "Saved."
//! variant = "success"
//! ```

use serde::Deserialize;

use crate::alert::Alert;
use crate::breadcrumbs::Breadcrumbs;
use crate::component::Widget;
use crate::context::RenderContext;
use crate::error::Result;

/// A single configured widget, tagged by `type`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WidgetConfig {
	/// Alert widget
	Alert(Alert),
	/// Breadcrumbs widget
	Breadcrumbs(Breadcrumbs),
}

impl WidgetConfig {
	/// Parse a single widget from TOML
	pub fn from_toml_str(source: &str) -> Result<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Parse a single widget from JSON
	pub fn from_json_str(source: &str) -> Result<Self> {
		Ok(serde_json::from_str(source)?)
	}
}

impl Widget for WidgetConfig {
	fn name(&self) -> &'static str {
		match self {
			Self::Alert(alert) => alert.name(),
			Self::Breadcrumbs(breadcrumbs) => breadcrumbs.name(),
		}
	}

	fn render(&self, ctx: &mut RenderContext) -> String {
		match self {
			Self::Alert(alert) => alert.render(ctx),
			Self::Breadcrumbs(breadcrumbs) => breadcrumbs.render(ctx),
		}
	}
}

/// An ordered list of widgets, e.g. the widgets of one page
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WidgetDocument {
	/// Widgets in document order
	#[serde(default)]
	pub widgets: Vec<WidgetConfig>,
}

impl WidgetDocument {
	/// Parse a document from TOML (`[[widgets]]` tables)
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let document: Self = toml::from_str(source)?;
		tracing::debug!(widgets = document.widgets.len(), "loaded widget document");
		Ok(document)
	}

	/// Parse a document from JSON (`{"widgets": [...]}`)
	pub fn from_json_str(source: &str) -> Result<Self> {
		let document: Self = serde_json::from_str(source)?;
		tracing::debug!(widgets = document.widgets.len(), "loaded widget document");
		Ok(document)
	}

	/// Render every widget in order into `ctx`
	pub fn render_all(&self, ctx: &mut RenderContext) -> Vec<String> {
		self.widgets.iter().map(|w| w.render(ctx)).collect()
	}
}
