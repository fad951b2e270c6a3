//! Error types for reinhardt-html

use thiserror::Error;

/// Error type for validated tag building
///
/// The plain rendering functions never fail; these errors only come out of
/// the `try_*` entry points that check names before emitting markup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HtmlError {
	/// Tag name is empty or contains characters not allowed in an HTML tag name
	#[error("Invalid tag name: {0:?}")]
	InvalidTagName(String),

	/// Attribute name is empty or contains characters not allowed in an attribute name
	#[error("Invalid HTML attribute: {0:?}")]
	InvalidAttributeName(String),
}

/// Result type for validated tag building
pub type Result<T> = std::result::Result<T, HtmlError>;
