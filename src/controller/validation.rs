//! Intake validation

use super::error::IntakeError;

pub const SVG_MEDIA_TYPE: &str = "image/svg+xml";
pub const SVG_EXTENSION: &str = ".svg";

/// What the input source declares about a file before it is read
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileCandidate {
    pub media_type: String,
    pub file_name: String,
}

impl FileCandidate {
    pub fn new(media_type: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            media_type: media_type.into(),
            file_name: file_name.into(),
        }
    }
}

/// Accept a file when its declared media type is exactly `image/svg+xml`
/// or its name ends with `.svg`.
///
/// The extension match is case-sensitive: `icon.SVG` only passes through
/// the media type.
pub fn validate_candidate(candidate: &FileCandidate) -> Result<(), IntakeError> {
    if candidate.media_type == SVG_MEDIA_TYPE || candidate.file_name.ends_with(SVG_EXTENSION) {
        Ok(())
    } else {
        Err(IntakeError::InvalidFormat)
    }
}
