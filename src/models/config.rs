//! Viewer configuration
//!
//! Everything the host page can tune: element ids, CSS class names used for
//! visibility and feedback, the default file name, the reset key and the
//! copy acknowledgment duration. Every field has a default, so a missing or
//! partial config object from JavaScript is valid.

use serde::{Deserialize, Serialize};

pub const DEFAULT_FILE_NAME: &str = "image.svg";
pub const DEFAULT_ACKNOWLEDGMENT_MS: u32 = 2000;
pub const DEFAULT_RESET_KEY: &str = "Delete";

/// DOM element ids the viewer binds to
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementIds {
    pub drop_zone: String,
    pub file_input: String,
    pub workspace: String,
    pub preview_container: String,
    pub code_output: String,
    pub filename_display: String,
    pub error_msg: String,
    pub error_text: String,
    pub copy_button: String,
    pub download_button: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            drop_zone: "drop-zone".to_string(),
            file_input: "file-input".to_string(),
            workspace: "workspace".to_string(),
            preview_container: "svg-preview-container".to_string(),
            code_output: "code-output".to_string(),
            filename_display: "filename-display".to_string(),
            error_msg: "error-msg".to_string(),
            error_text: "error-text".to_string(),
            copy_button: "copy-btn".to_string(),
            download_button: "download-btn".to_string(),
        }
    }
}

/// Complete viewer configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewerConfig {
    pub elements: ElementIds,

    /// File name restored on reset and used before any file is loaded
    pub default_file_name: String,

    /// How long the "copied" acknowledgment stays visible
    pub acknowledgment_ms: u32,

    /// `KeyboardEvent.key` value that clears the workspace
    pub reset_key: String,

    /// Classes toggled on the drop zone while a drag hovers over it
    pub drag_highlight_classes: Vec<String>,

    /// Class hiding the drop zone / workspace
    pub hidden_class: String,

    /// Class hiding the error banner
    pub error_hidden_class: String,

    /// Copy button classes: resting and acknowledged
    pub idle_copy_class: String,
    pub copied_class: String,

    /// Copy button label while acknowledged
    pub copied_label: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            elements: ElementIds::default(),
            default_file_name: DEFAULT_FILE_NAME.to_string(),
            acknowledgment_ms: DEFAULT_ACKNOWLEDGMENT_MS,
            reset_key: DEFAULT_RESET_KEY.to_string(),
            drag_highlight_classes: vec!["border-blue-500".to_string(), "bg-blue-50".to_string()],
            hidden_class: "hidden-node".to_string(),
            error_hidden_class: "hidden".to_string(),
            idle_copy_class: "bg-white/10".to_string(),
            copied_class: "bg-green-600".to_string(),
            copied_label: "Copied".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.default_file_name, "image.svg");
        assert_eq!(config.acknowledgment_ms, 2000);
        assert_eq!(config.reset_key, "Delete");
        assert_eq!(config.elements.drop_zone, "drop-zone");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let json = r#"{ "acknowledgmentMs": 500, "elements": { "dropZone": "zone" } }"#;
        let config: ViewerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.acknowledgment_ms, 500);
        assert_eq!(config.elements.drop_zone, "zone");
        assert_eq!(config.elements.file_input, "file-input");
        assert_eq!(config.reset_key, "Delete");
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: ViewerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ViewerConfig::default());
    }
}
