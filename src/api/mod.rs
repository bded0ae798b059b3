//! WASM API for the SVG viewer
//!
//! This module provides the JavaScript-facing surface: the `SvgViewer`
//! object and a standalone intake check.

pub mod helpers;
pub mod viewer;

pub use viewer::{SvgViewer, ViewerSnapshot};

use wasm_bindgen::prelude::*;
use crate::controller::{validate_candidate, FileCandidate};

/// Whether a file with this media type and name would be accepted
#[wasm_bindgen(js_name = isSvgCandidate)]
pub fn is_svg_candidate(media_type: &str, file_name: &str) -> bool {
    validate_candidate(&FileCandidate::new(media_type, file_name)).is_ok()
}
