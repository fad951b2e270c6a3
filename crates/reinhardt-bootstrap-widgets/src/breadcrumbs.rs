//! Breadcrumbs widget
//!
//! Renders a `nav` containing an ordered list of links. Links without a URL
//! and the last link are rendered with the active item template.
//!
//! ```
//! use reinhardt_bootstrap_widgets::{BreadcrumbLink, Breadcrumbs, HomeLink, RenderContext, Widget};
//!
//! let html = Breadcrumbs::new()
//!     .home_link(HomeLink::Disabled)
//!     .links([BreadcrumbLink::new("Library").url("/library"), BreadcrumbLink::new("Data")])
//!     .render(&mut RenderContext::new());
//!
//! assert!(html.ends_with("Data</li>\n</ol></nav>"));
//! ```

use reinhardt_html::{
	AttrValue, AttributeMap, ClassAddition, a, add_css_class, encode, tag,
};
use serde::Deserialize;

use crate::component::Widget;
use crate::context::RenderContext;

/// Placeholder replaced by the rendered link in item templates.
pub const LINK_PLACEHOLDER: &str = "{link}";

/// Default template for links with a URL.
pub const DEFAULT_ITEM_TEMPLATE: &str = "<li class=\"breadcrumb-item\">{link}</li>\n";

/// Default template for the active link.
pub const DEFAULT_ACTIVE_ITEM_TEMPLATE: &str =
	"<li class=\"breadcrumb-item active\" aria-current=\"page\">{link}</li>\n";

/// A single breadcrumb entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "LinkRepr")]
pub struct BreadcrumbLink {
	label: String,
	url: Option<String>,
	template: Option<String>,
	encode: Option<bool>,
	options: AttributeMap,
}

impl BreadcrumbLink {
	/// Create a link with only a label
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			url: None,
			template: None,
			encode: None,
			options: AttributeMap::new(),
		}
	}

	/// Target URL; links without one render as plain text
	pub fn url(mut self, url: impl Into<String>) -> Self {
		self.url = Some(url.into());
		self
	}

	/// Template overriding the widget's item templates for this link
	pub fn template(mut self, template: impl Into<String>) -> Self {
		self.template = Some(template.into());
		self
	}

	/// Override the widget's `encode_labels` setting for this link
	pub fn encode(mut self, encode: bool) -> Self {
		self.encode = Some(encode);
		self
	}

	/// Extra attribute for the anchor
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.options.insert(name, value);
		self
	}

	/// The link label
	pub fn label_text(&self) -> &str {
		&self.label
	}

	/// The link URL, if any
	pub fn url_str(&self) -> Option<&str> {
		self.url.as_deref()
	}
}

impl From<&str> for BreadcrumbLink {
	fn from(label: &str) -> Self {
		Self::new(label)
	}
}

impl From<String> for BreadcrumbLink {
	fn from(label: String) -> Self {
		Self::new(label)
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LinkRepr {
	Label(String),
	Full(LinkFields),
}

#[derive(Deserialize)]
struct LinkFields {
	label: String,
	#[serde(default)]
	url: Option<String>,
	#[serde(default)]
	template: Option<String>,
	#[serde(default)]
	encode: Option<bool>,
	#[serde(default)]
	options: AttributeMap,
}

impl From<LinkRepr> for BreadcrumbLink {
	fn from(repr: LinkRepr) -> Self {
		match repr {
			LinkRepr::Label(label) => Self::new(label),
			LinkRepr::Full(fields) => Self {
				label: fields.label,
				url: fields.url,
				template: fields.template,
				encode: fields.encode,
				options: fields.options,
			},
		}
	}
}

/// First breadcrumb entry
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "HomeLinkRepr")]
pub enum HomeLink {
	/// `Home` linking to `/`
	#[default]
	Default,
	/// A caller-supplied link
	Custom(BreadcrumbLink),
	/// No home entry
	Disabled,
}

impl HomeLink {
	fn resolve(&self) -> Option<BreadcrumbLink> {
		match self {
			Self::Default => Some(BreadcrumbLink::new("Home").url("/")),
			Self::Custom(link) => Some(link.clone()),
			Self::Disabled => None,
		}
	}
}

impl From<BreadcrumbLink> for HomeLink {
	fn from(link: BreadcrumbLink) -> Self {
		Self::Custom(link)
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HomeLinkRepr {
	Enabled(bool),
	Link(BreadcrumbLink),
}

impl From<HomeLinkRepr> for HomeLink {
	fn from(repr: HomeLinkRepr) -> Self {
		match repr {
			HomeLinkRepr::Enabled(true) => Self::Default,
			HomeLinkRepr::Enabled(false) => Self::Disabled,
			HomeLinkRepr::Link(link) => Self::Custom(link),
		}
	}
}

/// Breadcrumbs configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Breadcrumbs {
	tag: String,
	encode_labels: bool,
	home_link: HomeLink,
	links: Vec<BreadcrumbLink>,
	item_template: String,
	active_item_template: String,
	nav_options: AttributeMap,
	options: AttributeMap,
}

impl Breadcrumbs {
	/// Create breadcrumbs with the default `Home` entry and no links
	pub fn new() -> Self {
		Self {
			tag: "ol".to_owned(),
			encode_labels: true,
			home_link: HomeLink::Default,
			links: Vec::new(),
			item_template: DEFAULT_ITEM_TEMPLATE.to_owned(),
			active_item_template: DEFAULT_ACTIVE_ITEM_TEMPLATE.to_owned(),
			nav_options: AttributeMap::new().with("aria-label", "breadcrumb"),
			options: AttributeMap::new(),
		}
	}

	/// List container tag name
	pub fn tag(mut self, tag: impl Into<String>) -> Self {
		self.tag = tag.into();
		self
	}

	/// Whether labels are HTML-escaped
	pub fn encode_labels(mut self, encode: bool) -> Self {
		self.encode_labels = encode;
		self
	}

	/// First entry of the trail
	pub fn home_link(mut self, home: impl Into<HomeLink>) -> Self {
		self.home_link = home.into();
		self
	}

	/// Entries after the home link, in order
	pub fn links<I, L>(mut self, links: I) -> Self
	where
		I: IntoIterator<Item = L>,
		L: Into<BreadcrumbLink>,
	{
		self.links = links.into_iter().map(Into::into).collect();
		self
	}

	/// Template for links with a URL
	pub fn item_template(mut self, template: impl Into<String>) -> Self {
		self.item_template = template.into();
		self
	}

	/// Template for the active link
	pub fn active_item_template(mut self, template: impl Into<String>) -> Self {
		self.active_item_template = template.into();
		self
	}

	/// HTML attributes of the `nav` element
	pub fn nav_options(mut self, options: AttributeMap) -> Self {
		self.nav_options = options;
		self
	}

	/// HTML attributes of the list element
	pub fn options(mut self, options: AttributeMap) -> Self {
		self.options = options;
		self
	}

	fn render_item(&self, link: &BreadcrumbLink, template: &str) -> String {
		let label = if link.encode.unwrap_or(self.encode_labels) {
			encode(&link.label).into_owned()
		} else {
			link.label.clone()
		};
		let content = match &link.url {
			Some(url) => a(&label, url, &link.options),
			None => label,
		};
		link.template
			.as_deref()
			.unwrap_or(template)
			.replace(LINK_PLACEHOLDER, &content)
	}
}

impl Default for Breadcrumbs {
	fn default() -> Self {
		Self::new()
	}
}

impl Widget for Breadcrumbs {
	fn name(&self) -> &'static str {
		"breadcrumbs"
	}

	fn render(&self, ctx: &mut RenderContext) -> String {
		let mut options = if self.options.contains_key("id") {
			self.options.clone()
		} else {
			let id = format!("{}-breadcrumb", ctx.next_id(self.name()));
			self.options.prepend("id", id)
		};
		add_css_class(&mut options, ClassAddition::group("widget", "breadcrumb"));

		let id = options
			.get("id")
			.and_then(AttrValue::to_value_string)
			.unwrap_or_default();

		if self.links.is_empty() {
			tracing::debug!(widget = self.name(), id = %id, "no links, nothing rendered");
			return String::new();
		}
		tracing::debug!(
			widget = self.name(),
			id = %id,
			links = self.links.len(),
			"rendering widget"
		);

		let mut items = String::new();
		if let Some(home) = self.home_link.resolve() {
			items.push_str(&self.render_item(&home, &self.item_template));
		}
		let last = self.links.len() - 1;
		for (index, link) in self.links.iter().enumerate() {
			let template = if link.url.is_none() || index == last {
				&self.active_item_template
			} else {
				&self.item_template
			};
			items.push_str(&self.render_item(link, template));
		}

		tag("nav", &tag(&self.tag, &items, &options), &self.nav_options)
	}
}
