//! Error types for file intake and export
//!
//! Intake errors are user-visible and recoverable: they are shown through the
//! error sink and never change the loaded document. Export errors are only
//! logged.

use thiserror::Error;

/// User-visible intake failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// Neither the media type nor the extension identifies an SVG file
    #[error("Invalid format. Please upload an SVG file.")]
    InvalidFormat,

    /// The text read collaborator failed; the reason is kept for the log
    #[error("Error reading file.")]
    ReadFailure(String),
}

/// Best-effort export failures (never shown to the user)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// Neither the async clipboard API nor the legacy copy command is usable
    #[error("clipboard unavailable")]
    ClipboardUnavailable,

    #[error("clipboard write failed: {0}")]
    ClipboardWrite(String),

    #[error("download failed: {0}")]
    Download(String),
}
