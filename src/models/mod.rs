//! Models module for the SVG viewer
//!
//! Plain data: the loaded document and the viewer configuration.

pub mod config;
pub mod document;

// Re-export commonly used types
pub use config::*;
pub use document::*;
