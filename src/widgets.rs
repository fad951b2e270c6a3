//! Bootstrap widgets
//!
//! This module provides access to reinhardt-bootstrap-widgets.
//!
//! ## Architecture
//!
//! - **Widgets**: immutable configuration values implementing [`Widget`]
//! - **Render context**: per-page ID sequence and client plugin registrations
//! - **Configuration**: widgets loaded from TOML or JSON documents

// Re-export all reinhardt-bootstrap-widgets functionality
pub use reinhardt_bootstrap_widgets::*;
