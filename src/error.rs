//! Error types for the clubsite core.

use thiserror::Error;

/// Errors that can occur while building or driving site components.
///
/// User-input validation failures are not errors; they are ordinary
/// per-field messages (see [`crate::form`]). These variants cover the
/// structural preconditions: malformed static content and out-of-range
/// indices, which fail fast.
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Invalid date or time in event data: {0}")]
    InvalidEventData(#[from] chrono::ParseError),

    #[error("Invalid catalog JSON: {0}")]
    InvalidCatalog(#[from] serde_json::Error),

    #[error("No event at index {0}")]
    UnknownEvent(usize),

    #[error("Gallery has no images")]
    EmptyGallery,

    #[error("No image at index {0}")]
    UnknownImage(usize),
}

/// Result type alias for clubsite operations.
pub type SiteResult<T> = Result<T, SiteError>;
