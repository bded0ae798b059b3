//! Browser collaborators
//!
//! web-sys implementations of the controller's sinks and input source:
//! the DOM view, the dropped/picked file, and the clipboard/download exports.

pub mod dom;
pub mod export;
pub mod file;

pub use dom::DomView;
pub use export::BrowserExport;
pub use file::BrowserFile;

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::controller::FocusTarget;

/// Render a JS error value as a log-friendly string
pub fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}

pub fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("missing window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("missing document"))
}

/// Classify the focused element: keys typed into inputs and textareas are
/// never treated as viewer shortcuts.
pub fn focus_target(document: &Document) -> FocusTarget {
    match document.active_element() {
        Some(element) if is_text_input_tag(&element.tag_name()) => FocusTarget::TextInput,
        _ => FocusTarget::Other,
    }
}

pub fn is_text_input_tag(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("INPUT") || tag_name.eq_ignore_ascii_case("TEXTAREA")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_tags() {
        assert!(is_text_input_tag("INPUT"));
        assert!(is_text_input_tag("TEXTAREA"));
        assert!(is_text_input_tag("textarea"));
        assert!(!is_text_input_tag("BODY"));
        assert!(!is_text_input_tag("BUTTON"));
    }
}
