//! Central error types for the collage core (thiserror-based).

use thiserror::Error;

/// Errors raised by document edits and configuration loading.
///
/// Layout computation never fails; these only cover lookups and validation.
#[derive(Error, Debug)]
pub enum CollageError {
    #[error("Unknown paper size: {id}")]
    UnknownPaper { id: String },

    #[error("Invalid canvas size: {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("Photo not found: {id}")]
    PhotoNotFound { id: String },

    #[error("Cell not found: {id}")]
    CellNotFound { id: String },

    #[error("Text overlay not found: {id}")]
    TextOverlayNotFound { id: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience Result type for collage operations.
pub type CollageResult<T> = Result<T, CollageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = CollageError::UnknownPaper { id: "letter".into() };
        assert!(err.to_string().contains("letter"));

        let err = CollageError::InvalidCanvas {
            width: 0,
            height: 10,
        };
        assert_eq!(err.to_string(), "Invalid canvas size: 0x10");

        let err = CollageError::CellNotFound {
            id: "cell_9".into(),
        };
        assert!(err.to_string().contains("cell_9"));
    }

    #[test]
    fn json_error_conversion() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("not json");
        let err: CollageError = result.unwrap_err().into();
        assert!(matches!(err, CollageError::Json(_)));
    }
}
