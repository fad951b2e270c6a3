//! Client-side plugin registration.
//!
//! Widgets that pair with a Bootstrap jQuery plugin register it against
//! their root element ID. The host page emits the collected
//! [`ClientScript`]s after the markup.

use indexmap::IndexMap;
use reinhardt_html::html_encode_json;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Client script options carried by a widget.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
	/// Whether the plugin is registered at all
	pub enabled: bool,
	/// Options passed to the plugin constructor
	pub options: Map<String, Value>,
	/// Event name to JavaScript handler expression
	pub events: IndexMap<String, String>,
}

impl ClientOptions {
	/// Plugin registration with no options.
	pub fn new() -> Self {
		Self {
			enabled: true,
			options: Map::new(),
			events: IndexMap::new(),
		}
	}

	/// Disables plugin registration.
	pub fn disabled() -> Self {
		Self {
			enabled: false,
			..Self::new()
		}
	}

	/// Adds a plugin option.
	pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.options.insert(key.into(), value.into());
		self
	}

	/// Adds an event handler.
	pub fn event(mut self, event: impl Into<String>, handler: impl Into<String>) -> Self {
		self.events.insert(event.into(), handler.into());
		self
	}
}

impl Default for ClientOptions {
	fn default() -> Self {
		Self::new()
	}
}

/// A plugin registered against a rendered element.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientScript {
	plugin: String,
	target: String,
	options: Map<String, Value>,
	events: IndexMap<String, String>,
}

impl ClientScript {
	/// Creates a registration for `plugin` on the element with ID `target`.
	pub fn new(plugin: impl Into<String>, target: impl Into<String>, client: &ClientOptions) -> Self {
		Self {
			plugin: plugin.into(),
			target: target.into(),
			options: client.options.clone(),
			events: client.events.clone(),
		}
	}

	/// Plugin name, e.g. `alert`.
	pub fn plugin(&self) -> &str {
		&self.plugin
	}

	/// ID of the element the plugin is attached to.
	pub fn target(&self) -> &str {
		&self.target
	}

	/// Renders the jQuery statements for this registration.
	///
	/// The constructor call comes first, followed by one `.on(...)` per
	/// event handler, each on its own line.
	pub fn to_js(&self) -> String {
		let options = if self.options.is_empty() {
			String::new()
		} else {
			html_encode_json(&Value::Object(self.options.clone()))
		};
		let selector = js_string(&format!("#{}", self.target));
		let mut lines = vec![format!("jQuery({}).{}({});", selector, self.plugin, options)];
		for (event, handler) in &self.events {
			lines.push(format!(
				"jQuery({}).on({}, {});",
				selector,
				js_string(event),
				handler
			));
		}
		lines.join("\n")
	}
}

/// Single-quoted JavaScript string literal, safe inside a `<script>` block.
fn js_string(value: &str) -> String {
	let encoded = html_encode_json(&Value::String(value.to_owned()));
	let inner = encoded
		.strip_prefix('"')
		.and_then(|rest| rest.strip_suffix('"'))
		.unwrap_or(&encoded);
	format!("'{}'", inner)
}
