//! The loaded SVG document
//!
//! `LoadedDocument` is the only stateful entity of the viewer. It is either
//! empty (nothing loaded, default file name) or holds the full text of a
//! file that passed intake validation. It is always replaced as a unit.

use serde::{Deserialize, Serialize};

/// Viewer state derived from the current document
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ViewerState {
    /// No document loaded (initial and post-reset state)
    Empty,
    /// A validated SVG document is loaded
    Loaded,
}

/// Content and name of the active SVG file
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoadedDocument {
    /// Raw SVG markup, passed through verbatim
    pub content: String,

    /// Name used as the suggested save name on download
    pub file_name: String,
}

impl LoadedDocument {
    /// Create an empty document carrying the default file name
    pub fn empty(default_name: impl Into<String>) -> Self {
        Self {
            content: String::new(),
            file_name: default_name.into(),
        }
    }

    /// Create a loaded document from file text and name
    pub fn new(content: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            file_name: file_name.into(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        !self.content.is_empty()
    }

    pub fn state(&self) -> ViewerState {
        if self.is_loaded() {
            ViewerState::Loaded
        } else {
            ViewerState::Empty
        }
    }

    /// Download payload (UTF-8 bytes of the content)
    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_state() {
        let doc = LoadedDocument::empty("image.svg");
        assert_eq!(doc.content, "");
        assert_eq!(doc.file_name, "image.svg");
        assert!(!doc.is_loaded());
        assert_eq!(doc.state(), ViewerState::Empty);
    }

    #[test]
    fn test_loaded_document_state() {
        let doc = LoadedDocument::new("<svg></svg>", "icon.svg");
        assert!(doc.is_loaded());
        assert_eq!(doc.state(), ViewerState::Loaded);
        assert_eq!(doc.as_bytes(), b"<svg></svg>");
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let doc = LoadedDocument::new("<svg/>", "a.svg");
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["content"], "<svg/>");
        assert_eq!(json["fileName"], "a.svg");
        assert_eq!(serde_json::to_value(doc.state()).unwrap(), "loaded");
    }
}
