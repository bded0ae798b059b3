//! SVG Viewer WASM Module
//!
//! Accepts a dropped or picked SVG file, renders it, shows its markup and
//! offers copy and download. The state lives in `controller::Controller`;
//! `browser` supplies the DOM and browser-API collaborators and `api` the
//! JavaScript surface.

pub mod models;
pub mod controller;
pub mod browser;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use controller::{Controller, FileCandidate, FocusTarget, IntakeError, ExportError};
pub use api::SvgViewer;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        wasm_warn!("Logger already initialized");
    }

    log::info!("SVG viewer WASM module initialized");
}
