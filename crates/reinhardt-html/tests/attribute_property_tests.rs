//! Attribute rendering property tests
//!
//! Property-based tests for class deduplication, group removal and
//! attribute escaping.

use proptest::prelude::*;
use reinhardt_html::{
	AttributeMap, ClassAddition, add_css_class, close_tag, open_tag, remove_css_class_group,
	render_tag_attributes,
};
use rstest::*;

fn rendered_class_tokens(attrs: &AttributeMap) -> Vec<String> {
	attrs
		.class_string()
		.unwrap_or_default()
		.split(' ')
		.filter(|t| !t.is_empty())
		.map(str::to_owned)
		.collect()
}

// ============================================================================
// Property-Based Tests: class merging
// ============================================================================

proptest! {
	/// Test: every distinct token is rendered exactly once
	///
	/// Category: Property
	/// Verifies that no merge sequence can duplicate a class token.
	#[rstest]
	fn prop_class_tokens_unique(
		plain in prop::collection::vec(prop::collection::vec("[a-d]{1,2}", 0..4), 0..4),
		groups in prop::collection::vec(("[g-i]", "[a-d]{1,2}"), 0..4),
	) {
		let mut attrs = AttributeMap::new();
		for tokens in &plain {
			add_css_class(&mut attrs, tokens.clone());
		}
		for (key, token) in &groups {
			add_css_class(&mut attrs, ClassAddition::group(key.clone(), token));
		}

		let tokens = rendered_class_tokens(&attrs);
		let mut deduped = tokens.clone();
		deduped.sort();
		deduped.dedup();
		prop_assert_eq!(tokens.len(), deduped.len());

		for token in plain.iter().flatten() {
			prop_assert!(tokens.contains(token));
		}
	}

	/// Test: removing an absent group is a no-op
	///
	/// Category: Property
	/// Verifies that unknown group keys never alter the rendered attributes.
	#[rstest]
	fn prop_remove_absent_group_noop(
		tokens in prop::collection::vec("[a-z]{1,6}", 0..5),
		id in "[a-z]{1,8}",
	) {
		let mut attrs = AttributeMap::new().with("id", id);
		add_css_class(&mut attrs, ClassAddition::group("widget", "base"));
		add_css_class(&mut attrs, tokens);
		let before = render_tag_attributes(&attrs);

		remove_css_class_group(&mut attrs, "never-added");

		prop_assert_eq!(render_tag_attributes(&attrs), before);
	}

	/// Test: attribute values cannot break out of their quotes
	///
	/// Category: Property
	/// Verifies that rendered values contain no raw markup characters.
	#[rstest]
	fn prop_values_are_escaped(value in ".*") {
		let attrs = AttributeMap::new().with("title", value);
		let html = render_tag_attributes(&attrs);
		let inner = html
			.strip_prefix(" title=\"")
			.and_then(|s| s.strip_suffix('"'))
			.unwrap();
		prop_assert!(!inner.contains(['"', '<', '>', '\'']));
	}

	/// Test: open + content + close forms a single element
	///
	/// Category: Property
	/// Verifies the tag pair brackets the content for legal names.
	#[rstest]
	fn prop_tag_pair_wraps_content(name in "[a-z][a-z0-9]{0,6}", content in "[a-zA-Z ]*") {
		let attrs = AttributeMap::new().with("id", "x");
		let html = format!("{}{}{}", open_tag(&name, &attrs), content, close_tag(&name));
		let expected_open = format!("<{} id=\"x\">", name);
		let expected_close = format!("</{}>", name);
		prop_assert!(html.starts_with(&expected_open));
		prop_assert!(html.ends_with(&expected_close));
		prop_assert_eq!(html.matches('<').count(), 2);
	}
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[rstest]
fn test_toggle_style_removal_keeps_base_class() {
	let mut attrs = AttributeMap::new().with("id", "w0-alert");
	add_css_class(&mut attrs, ClassAddition::group("widget", "alert"));
	add_css_class(&mut attrs, ClassAddition::group("alert-dismissible", "alert-dismissible"));
	assert_eq!(
		render_tag_attributes(&attrs),
		r#" id="w0-alert" class="alert alert-dismissible""#
	);

	remove_css_class_group(&mut attrs, "alert-dismissible");
	assert_eq!(
		render_tag_attributes(&attrs),
		r#" id="w0-alert" class="alert""#
	);
}

#[rstest]
fn test_caller_group_preempts_widget_default() {
	let mut attrs = AttributeMap::new();
	add_css_class(&mut attrs, ClassAddition::group("widget", "my-alert"));
	add_css_class(&mut attrs, ClassAddition::group("widget", "alert"));
	assert_eq!(render_tag_attributes(&attrs), r#" class="my-alert""#);
}
