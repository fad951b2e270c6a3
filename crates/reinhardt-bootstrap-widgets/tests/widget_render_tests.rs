//! Widget rendering integration tests
//!
//! End-to-end rendering of Alert and Breadcrumbs through a shared
//! RenderContext.

use reinhardt_bootstrap_widgets::{
	Alert, BreadcrumbLink, Breadcrumbs, ClientOptions, IdSequence, RenderContext, Widget,
};
use reinhardt_html::AttributeMap;
use rstest::*;

#[fixture]
fn ctx() -> RenderContext {
	RenderContext::new()
}

// ============================================================================
// Breadcrumbs
// ============================================================================

/// Test: breadcrumb trail with home link
///
/// Category: Scenario
/// Verifies byte-exact output including newlines between items.
#[rstest]
fn test_breadcrumbs_render(mut ctx: RenderContext) {
	ctx.ids_mut().reset(0);

	let html = Breadcrumbs::new()
		.home_link(BreadcrumbLink::new("Home").url("#"))
		.links([
			BreadcrumbLink::new("Library").url("#"),
			BreadcrumbLink::new("Data"),
		])
		.render(&mut ctx);

	let expected = "<nav aria-label=\"breadcrumb\"><ol id=\"w0-breadcrumb\" class=\"breadcrumb\"><li class=\"breadcrumb-item\"><a href=\"#\">Home</a></li>\n\
<li class=\"breadcrumb-item\"><a href=\"#\">Library</a></li>\n\
<li class=\"breadcrumb-item active\" aria-current=\"page\">Data</li>\n\
</ol></nav>";
	assert_eq!(html, expected);
}

/// Test: reset makes output reproducible
///
/// Category: Scenario
/// Verifies that resetting the sequence reproduces the same IDs.
#[rstest]
fn test_breadcrumbs_reset_reproduces_ids(mut ctx: RenderContext) {
	let widget = Breadcrumbs::new().links(["Data"]);

	let first = widget.render(&mut ctx);
	let second = widget.render(&mut ctx);
	assert!(first.contains("w0-breadcrumb"));
	assert!(second.contains("w1-breadcrumb"));

	ctx.ids_mut().reset(0);
	assert_eq!(widget.render(&mut ctx), first);
}

// ============================================================================
// Alert
// ============================================================================

/// Test: default alert with close button
///
/// Category: Scenario
/// Verifies container classes, role, body and dismiss button.
#[rstest]
fn test_alert_default_with_close_button(mut ctx: RenderContext) {
	let html = Alert::new().body("Say hello...").render(&mut ctx);

	let expected = "<div id=\"w0-alert\" class=\"alert alert-dismissible\" role=\"alert\">\n\
\n\
Say hello...\n\
<button type=\"button\" class=\"close\" data-dismiss=\"alert\"><span aria-hidden=\"true\">&times;</span></button>\n\
\n\
</div>";
	assert_eq!(html, expected);
}

/// Test: caller options merge with widget defaults
///
/// Category: Scenario
/// Verifies caller classes are kept ahead of the widget's own classes.
#[rstest]
fn test_alert_with_options(mut ctx: RenderContext) {
	let html = Alert::new()
		.options(AttributeMap::new().with("class", "alert-info"))
		.body("Info")
		.render(&mut ctx);

	assert!(html.starts_with(
		"<div id=\"w0-alert\" class=\"alert-info alert alert-dismissible\" role=\"alert\">"
	));
}

// ============================================================================
// Shared context
// ============================================================================

/// Test: counters are scoped per widget type
///
/// Category: Scenario
/// Verifies that Alert and Breadcrumbs number their instances independently.
#[rstest]
fn test_counters_scoped_per_widget_type(mut ctx: RenderContext) {
	let alert = Alert::new().render(&mut ctx);
	let crumbs = Breadcrumbs::new().links(["Data"]).render(&mut ctx);
	let alert2 = Alert::new().render(&mut ctx);

	assert!(alert.contains("id=\"w0-alert\""));
	assert!(crumbs.contains("id=\"w0-breadcrumb\""));
	assert!(alert2.contains("id=\"w1-alert\""));
}

/// Test: client scripts are collected in render order
///
/// Category: Scenario
/// Verifies plugin registration output for a page.
#[rstest]
fn test_client_scripts_collected(mut ctx: RenderContext) {
	Alert::new()
		.client_options(ClientOptions::new().option("fade", true))
		.render(&mut ctx);
	Breadcrumbs::new().links(["Data"]).render(&mut ctx);
	Alert::new()
		.client_options(ClientOptions::disabled())
		.render(&mut ctx);
	Alert::new().render(&mut ctx);

	assert_eq!(
		ctx.client_script(),
		"jQuery('#w0-alert').alert({\"fade\":true});\njQuery('#w2-alert').alert();"
	);
}

/// Test: injected sequence
///
/// Category: Scenario
/// Verifies that a prepared sequence controls generated IDs.
#[rstest]
fn test_injected_sequence() {
	let mut ids = IdSequence::new().with_prefix("page");
	ids.set_counter("alert", 4);
	let mut ctx = RenderContext::with_sequence(ids);

	let html = Alert::new().render(&mut ctx);
	assert!(html.contains("id=\"page4-alert\""));
}

/// Test: widgets render through trait objects
///
/// Category: Scenario
/// Verifies heterogeneous widget lists.
#[rstest]
fn test_boxed_widgets(mut ctx: RenderContext) {
	let widgets: Vec<Box<dyn Widget>> = vec![
		Box::new(Alert::new().body("A")),
		Box::new(Breadcrumbs::new().links(["B"])),
	];
	let names: Vec<&str> = widgets.iter().map(|w| w.name()).collect();
	assert_eq!(names, vec!["alert", "breadcrumbs"]);

	let html: Vec<String> = widgets.iter().map(|w| w.render(&mut ctx)).collect();
	assert!(html[0].starts_with("<div"));
	assert!(html[1].starts_with("<nav"));
}
