//! Intake-and-display controller
//!
//! Owns the `LoadedDocument` and moves the viewer between `Empty` and
//! `Loaded`:
//!
//! ```text
//! Empty  --submit(valid)-->   Loaded
//! Empty  --submit(invalid)--> Empty   (error shown)
//! Loaded --submit(valid)-->   Loaded  (document replaced)
//! Loaded --submit(invalid)--> Loaded  (document kept, error shown)
//! Loaded --reset-->           Empty
//! Empty  --reset-->           Empty
//! ```
//!
//! Reading the file text is the only asynchronous step, so intake is split
//! in two: `submit_file` validates and hands out a `PendingIntake`, the
//! caller awaits the read, then `complete_intake` applies the result. No
//! borrow of the controller is held while the read is in flight.
//! Clipboard export follows the same pattern with `clipboard_payload` and
//! `complete_clipboard`.

pub mod error;
pub mod sinks;
pub mod validation;

pub use error::{ExportError, IntakeError};
pub use sinks::{ErrorSink, ExportSink, PresentationSink};
pub use validation::{validate_candidate, FileCandidate, SVG_EXTENSION, SVG_MEDIA_TYPE};

use crate::models::{LoadedDocument, ViewerConfig, ViewerState};

/// Where keyboard focus was when a key event arrived
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusTarget {
    /// An `<input>` or `<textarea>`: keys belong to the editor control
    TextInput,
    Other,
}

/// An accepted file whose text is still being read
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingIntake {
    /// Submission order; only used for logging, completions apply in
    /// completion order
    pub ticket: u64,
    pub file_name: String,
}

pub struct Controller<P, E, X> {
    config: ViewerConfig,
    document: LoadedDocument,
    next_ticket: u64,
    presentation: P,
    errors: E,
    export: X,
}

impl<P, E, X> Controller<P, E, X>
where
    P: PresentationSink,
    E: ErrorSink,
    X: ExportSink,
{
    pub fn new(config: ViewerConfig, presentation: P, errors: E, export: X) -> Self {
        let document = LoadedDocument::empty(config.default_file_name.clone());
        Self {
            config,
            document,
            next_ticket: 0,
            presentation,
            errors,
            export,
        }
    }

    pub fn document(&self) -> &LoadedDocument {
        &self.document
    }

    pub fn state(&self) -> ViewerState {
        self.document.state()
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn errors(&self) -> &E {
        &self.errors
    }

    pub fn export(&self) -> &X {
        &self.export
    }

    /// First phase of intake: validate the candidate.
    ///
    /// An absent file is a silent no-op (`Ok(None)`). An invalid one shows
    /// the error and leaves the document untouched.
    pub fn submit_file(
        &mut self,
        candidate: Option<&FileCandidate>,
    ) -> Result<Option<PendingIntake>, IntakeError> {
        let Some(candidate) = candidate else {
            log::debug!("submit_file: no file supplied");
            return Ok(None);
        };

        if let Err(err) = validate_candidate(candidate) {
            log::warn!(
                "Rejected '{}' (type '{}'): {}",
                candidate.file_name,
                candidate.media_type,
                err
            );
            self.errors.show_error(&err.to_string());
            return Err(err);
        }

        self.next_ticket += 1;
        let pending = PendingIntake {
            ticket: self.next_ticket,
            file_name: candidate.file_name.clone(),
        };
        log::info!("Accepted '{}' (intake #{})", pending.file_name, pending.ticket);
        Ok(Some(pending))
    }

    /// Second phase of intake: apply the outcome of the text read.
    ///
    /// Whichever read completes last wins; there is no ordering by ticket.
    pub fn complete_intake(
        &mut self,
        pending: PendingIntake,
        read: Result<String, String>,
    ) -> Result<(), IntakeError> {
        let content = match read {
            Ok(content) => content,
            Err(reason) => {
                log::error!(
                    "Reading '{}' (intake #{}) failed: {}",
                    pending.file_name,
                    pending.ticket,
                    reason
                );
                let err = IntakeError::ReadFailure(reason);
                self.errors.show_error(&err.to_string());
                return Err(err);
            }
        };

        if pending.ticket < self.next_ticket {
            log::debug!(
                "Intake #{} completed after a newer submission (latest #{})",
                pending.ticket,
                self.next_ticket
            );
        }

        self.document = LoadedDocument::new(content, pending.file_name);
        log::info!(
            "Loaded '{}' ({} bytes)",
            self.document.file_name,
            self.document.content.len()
        );

        self.errors.clear_error();
        self.presentation.show_workspace();
        self.presentation.show_file_name(&self.document.file_name);
        self.presentation.show_raw_text(&self.document.content);
        self.presentation.render_markup(&self.document.content);
        Ok(())
    }

    /// Clear the document back to the empty state. Idempotent.
    pub fn reset(&mut self) {
        self.document = LoadedDocument::empty(self.config.default_file_name.clone());
        self.presentation.clear();
        log::info!("Workspace reset");
    }

    /// Keyboard shortcut: the reset key clears a loaded document unless
    /// focus is inside a text control.
    ///
    /// Returns `true` when the key was consumed and the default action
    /// should be prevented.
    pub fn handle_key(&mut self, key: &str, focus: FocusTarget) -> bool {
        if key != self.config.reset_key
            || !self.document.is_loaded()
            || focus == FocusTarget::TextInput
        {
            return false;
        }
        self.reset();
        true
    }

    /// Snapshot of the content to place on the clipboard
    pub fn clipboard_payload(&self) -> String {
        self.document.content.clone()
    }

    /// Apply the outcome of a clipboard write. Failure is logged only.
    pub fn complete_clipboard(&self, result: Result<(), ExportError>) {
        match result {
            Ok(()) => self.presentation.show_acknowledgment(self.config.acknowledgment_ms),
            Err(err) => log::error!("Copy failed: {}", err),
        }
    }

    /// Offer the current content as a download named after the loaded file
    pub fn export_to_file(&self) {
        let name = &self.document.file_name;
        match self.export.trigger_download(self.document.as_bytes(), name) {
            Ok(()) => log::info!("Download of '{}' triggered", name),
            Err(err) => log::error!("Download of '{}' failed: {}", name, err),
        }
    }
}
