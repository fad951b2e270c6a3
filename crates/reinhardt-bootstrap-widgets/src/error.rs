//! Error types for reinhardt-bootstrap-widgets

use thiserror::Error;

/// Error type for loading widget configuration
///
/// Rendering itself never fails; only turning configuration text into
/// widgets can.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// TOML document could not be parsed into widgets
	#[error("Invalid TOML widget configuration: {0}")]
	Toml(#[from] toml::de::Error),

	/// JSON document could not be parsed into widgets
	#[error("Invalid JSON widget configuration: {0}")]
	Json(#[from] serde_json::Error),
}

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;
