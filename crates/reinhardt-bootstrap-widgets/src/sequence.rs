//! Auto-generated widget IDs.
//!
//! Each widget type keeps its own counter, so the first Alert and the first
//! Breadcrumbs rendered with the same sequence both get `w0`.

use std::collections::HashMap;

/// Default prefix for generated IDs.
pub const AUTO_ID_PREFIX: &str = "w";

/// Per-widget-type ID counters.
#[derive(Debug, Clone)]
pub struct IdSequence {
	prefix: String,
	start: u64,
	counters: HashMap<&'static str, u64>,
}

impl IdSequence {
	/// Creates a sequence with every counter at zero.
	pub fn new() -> Self {
		Self {
			prefix: AUTO_ID_PREFIX.to_owned(),
			start: 0,
			counters: HashMap::new(),
		}
	}

	/// Uses `prefix` instead of [`AUTO_ID_PREFIX`].
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	/// Returns the next ID for `widget` and advances its counter.
	///
	/// A counter at `u64::MAX` stays there, so IDs repeat from then on.
	pub fn next_id(&mut self, widget: &'static str) -> String {
		let counter = self.counters.entry(widget).or_insert(self.start);
		let id = format!("{}{}", self.prefix, counter);
		match counter.checked_add(1) {
			Some(next) => *counter = next,
			None => tracing::warn!(widget, "id counter exhausted, ids will repeat"),
		}
		id
	}

	/// Value the next ID for `widget` will use.
	pub fn counter(&self, widget: &str) -> u64 {
		self.counters.get(widget).copied().unwrap_or(self.start)
	}

	/// Sets the counter for `widget`.
	pub fn set_counter(&mut self, widget: &'static str, value: u64) {
		self.counters.insert(widget, value);
	}

	/// Resets every counter, including those of widget types not rendered
	/// yet, to `value`.
	pub fn reset(&mut self, value: u64) {
		self.counters.clear();
		self.start = value;
	}
}

impl Default for IdSequence {
	fn default() -> Self {
		Self::new()
	}
}
