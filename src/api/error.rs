//! Failure taxonomy for calls to the preview backend

use thiserror::Error;

/// Everything that can go wrong between pressing a button and getting a URL back
///
/// Carried inside UI messages, so it must stay `Clone`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The chosen file could not be read from disk
    #[error("could not read '{path}': {reason}")]
    Io { path: String, reason: String },

    /// Connection refused, DNS failure, reset mid-body, ...
    #[error("could not reach the preview backend: {0}")]
    Transport(String),

    /// The backend answered with a non-success status
    #[error("preview backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The body did not have the expected JSON shape
    #[error("unexpected response from the preview backend: {0}")]
    Decode(String),

    /// The blocking worker panicked or was cancelled
    #[error("background task failed: {0}")]
    Task(String),
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(status) => ApiError::Status {
                status,
                message: String::new(),
            },
            other => ApiError::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status {
            status: 400,
            message: "no file sent".to_string(),
        };
        assert_eq!(err.to_string(), "preview backend returned 400: no file sent");
    }

    #[test]
    fn test_ureq_status_code_maps_to_status() {
        let err: ApiError = ureq::Error::StatusCode(503).into();
        assert_eq!(
            err,
            ApiError::Status {
                status: 503,
                message: String::new()
            }
        );
    }
}
