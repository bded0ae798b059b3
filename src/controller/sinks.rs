//! Collaborator traits
//!
//! The controller never touches the DOM or browser APIs directly; it drives
//! these sinks. `browser` provides the web-sys implementations.

use super::error::ExportError;

/// Visual output: preview, raw markup, file name, workspace visibility
pub trait PresentationSink {
    /// Render the markup visually
    fn render_markup(&self, content: &str);

    /// Echo the markup as plain text
    fn show_raw_text(&self, content: &str);

    fn show_file_name(&self, file_name: &str);

    /// Swap the drop zone for the workspace
    fn show_workspace(&self);

    /// Clear preview and raw text and bring the drop zone back
    fn clear(&self);

    /// Transient "copied" feedback; reverts by itself after `duration_ms`
    fn show_acknowledgment(&self, duration_ms: u32);
}

/// User-visible error banner
pub trait ErrorSink {
    fn show_error(&self, message: &str);
    fn clear_error(&self);
}

/// File download
pub trait ExportSink {
    fn trigger_download(&self, bytes: &[u8], suggested_name: &str) -> Result<(), ExportError>;
}
