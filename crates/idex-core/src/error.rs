//! Error types for the idex-core library.
//!
//! Field extraction itself never fails: unresolved fields are data, not errors.
//! These types cover the surrounding I/O: the OCR boundary and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the idex library.
#[derive(Error, Debug)]
pub enum IdexError {
    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors related to the external OCR engine.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The image to recognize does not exist.
    #[error("input image not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The OCR program could not be started.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The OCR program exited unsuccessfully.
    #[error("OCR engine exited with status {}: {stderr}", status_label(.status))]
    Failed { status: Option<i32>, stderr: String },

    /// The OCR program produced output that is not valid UTF-8 text.
    #[error("invalid OCR output: {0}")]
    InvalidOutput(String),
}

fn status_label(status: &Option<i32>) -> String {
    status
        .map(|code| code.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Result type for the idex library.
pub type Result<T> = std::result::Result<T, IdexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ocr_error_converts_into_idex_error() {
        let err: IdexError = OcrError::InputNotFound(PathBuf::from("missing.png")).into();
        assert_eq!(
            err.to_string(),
            "OCR error: input image not found: missing.png"
        );
    }

    #[test]
    fn test_failed_status_display() {
        let err = OcrError::Failed {
            status: None,
            stderr: "killed".to_string(),
        };
        assert_eq!(err.to_string(), "OCR engine exited with status unknown: killed");

        let err = OcrError::Failed {
            status: Some(1),
            stderr: "bad image".to_string(),
        };
        assert_eq!(err.to_string(), "OCR engine exited with status 1: bad image");
    }
}
