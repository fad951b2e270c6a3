//! Render context shared by the widgets of one page.

use crate::plugin::{ClientOptions, ClientScript};
use crate::sequence::IdSequence;

/// State threaded through widget rendering.
///
/// Holds the ID sequence and collects client script registrations. Create
/// one per page; render widgets into it in document order.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
	ids: IdSequence,
	scripts: Vec<ClientScript>,
}

impl RenderContext {
	/// Creates a context with a fresh ID sequence.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a context around an existing sequence.
	pub fn with_sequence(ids: IdSequence) -> Self {
		Self {
			ids,
			scripts: Vec::new(),
		}
	}

	/// Returns the next auto-generated ID for `widget`.
	pub fn next_id(&mut self, widget: &'static str) -> String {
		self.ids.next_id(widget)
	}

	/// The ID sequence.
	pub fn ids(&self) -> &IdSequence {
		&self.ids
	}

	/// Mutable access to the ID sequence, e.g. to reset it between tests.
	pub fn ids_mut(&mut self) -> &mut IdSequence {
		&mut self.ids
	}

	/// Registers `plugin` against the element with ID `target`.
	///
	/// Nothing is recorded when `client` is disabled.
	pub fn register_plugin(&mut self, plugin: &str, target: &str, client: &ClientOptions) {
		if !client.enabled {
			tracing::trace!(plugin, target, "client script disabled");
			return;
		}
		tracing::debug!(plugin, target, "registering client plugin");
		self.scripts.push(ClientScript::new(plugin, target, client));
	}

	/// Registered scripts in registration order.
	pub fn scripts(&self) -> &[ClientScript] {
		&self.scripts
	}

	/// All registered scripts as JavaScript, one statement per line.
	pub fn client_script(&self) -> String {
		self.scripts
			.iter()
			.map(ClientScript::to_js)
			.collect::<Vec<_>>()
			.join("\n")
	}

	/// Removes and returns the registered scripts.
	pub fn take_scripts(&mut self) -> Vec<ClientScript> {
		std::mem::take(&mut self.scripts)
	}
}
