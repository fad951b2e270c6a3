//! Alert widget
//!
//! Renders a Bootstrap alert box with an optional dismiss button.
//!
//! ```
//! use reinhardt_bootstrap_widgets::{Alert, RenderContext, Widget};
//!
//! let mut ctx = RenderContext::new();
//! let html = Alert::new().body("Say hello...").render(&mut ctx);
//!
//! assert!(html.starts_with(r#"<div id="w0-alert" class="alert alert-dismissible" role="alert">"#));
//! assert_eq!(ctx.client_script(), "jQuery('#w0-alert').alert();");
//! ```

use reinhardt_html::{
	AttrValue, AttributeMap, ClassAddition, add_css_class, close_tag, open_tag,
	remove_css_class_group, tag,
};
use serde::Deserialize;

use crate::component::{Variant, Widget};
use crate::context::RenderContext;
use crate::plugin::ClientOptions;

const DISMISSIBLE_GROUP: &str = "alert-dismissible";

/// Alert configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Alert {
	body: Option<String>,
	variant: Option<Variant>,
	close_button: AttributeMap,
	close_button_enabled: bool,
	options: AttributeMap,
	#[serde(alias = "client_options")]
	client: ClientOptions,
}

impl Alert {
	/// Create an alert with the default dismiss button
	pub fn new() -> Self {
		Self {
			body: None,
			variant: None,
			close_button: AttributeMap::new(),
			close_button_enabled: true,
			options: AttributeMap::new(),
			client: ClientOptions::new(),
		}
	}

	/// Body content, inserted without escaping
	pub fn body(mut self, body: impl Into<String>) -> Self {
		self.body = Some(body.into());
		self
	}

	/// Contextual color, adds `alert-{variant}`
	pub fn variant(mut self, variant: Variant) -> Self {
		self.variant = Some(variant);
		self
	}

	/// Close button options
	///
	/// `tag` (default `button`) and `label` (default a `&times;` span) are
	/// consumed; everything else is rendered as attributes of the button.
	pub fn close_button(mut self, options: AttributeMap) -> Self {
		self.close_button = options;
		self
	}

	/// Enable or disable the dismiss button
	pub fn close_button_enabled(mut self, enabled: bool) -> Self {
		self.close_button_enabled = enabled;
		self
	}

	/// HTML attributes of the container `div`
	pub fn options(mut self, options: AttributeMap) -> Self {
		self.options = options;
		self
	}

	/// Client plugin options
	pub fn client_options(mut self, client: ClientOptions) -> Self {
		self.client = client;
		self
	}

	fn container_options(&self, ctx: &mut RenderContext) -> AttributeMap {
		let mut options = if self.options.contains_key("id") {
			self.options.clone()
		} else {
			let id = format!("{}-alert", ctx.next_id(self.name()));
			self.options.prepend("id", id)
		};

		add_css_class(&mut options, ClassAddition::group("widget", "alert"));
		if let Some(variant) = self.variant {
			add_css_class(
				&mut options,
				ClassAddition::group("variant", &variant.class_for("alert")),
			);
		}
		if self.close_button_enabled {
			add_css_class(
				&mut options,
				ClassAddition::group(DISMISSIBLE_GROUP, "alert-dismissible"),
			);
		} else {
			remove_css_class_group(&mut options, DISMISSIBLE_GROUP);
		}
		options.insert_default("role", "alert");
		options
	}

	fn render_close_button(&self) -> Option<String> {
		if !self.close_button_enabled {
			return None;
		}

		let mut extra = self.close_button.clone();
		let tag_name = extra
			.remove("tag")
			.and_then(|v| v.to_value_string())
			.unwrap_or_else(|| "button".to_owned());
		let label = extra
			.remove("label")
			.and_then(|v| v.to_value_string())
			.unwrap_or_else(|| {
				tag(
					"span",
					"&times;",
					&AttributeMap::new().with("aria-hidden", "true"),
				)
			});

		let mut attrs = AttributeMap::new();
		if tag_name == "button" && !extra.contains_key("type") {
			attrs.insert("type", "button");
		}
		if let Some(class) = extra.remove("class") {
			attrs.insert("class", class);
		}
		add_css_class(&mut attrs, ClassAddition::group("widget", "close"));
		if !extra.contains_key("data-dismiss") {
			attrs.insert("data-dismiss", "alert");
		}
		for (name, value) in extra.iter() {
			attrs.insert(name, value.clone());
		}

		Some(tag(&tag_name, &label, &attrs))
	}
}

impl Default for Alert {
	fn default() -> Self {
		Self::new()
	}
}

impl Widget for Alert {
	fn name(&self) -> &'static str {
		"alert"
	}

	fn render(&self, ctx: &mut RenderContext) -> String {
		let options = self.container_options(ctx);
		let id = options
			.get("id")
			.and_then(AttrValue::to_value_string)
			.unwrap_or_default();
		tracing::debug!(widget = self.name(), id = %id, "rendering widget");

		ctx.register_plugin("alert", &id, &self.client);

		let mut html = open_tag("div", &options);
		html.push_str("\n\n");
		html.push_str(self.body.as_deref().unwrap_or_default());
		html.push('\n');
		if let Some(button) = self.render_close_button() {
			html.push_str(&button);
		}
		html.push_str("\n\n");
		html.push_str(&close_tag("div"));
		html
	}
}
