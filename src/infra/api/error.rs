use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorPayload;

/// Errors from the backend REST layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, body read).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("API error ({status}): {payload}")]
    Status { status: u16, payload: ErrorPayload },

    /// A 2xx body that does not have the expected shape.
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A multipart attachment could not be read from disk.
    #[error("Cannot read attachment {path}: {source}")]
    Attachment {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<ApiError> for ErrorPayload {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { payload, .. } => payload,
            ApiError::Request(err) if err.is_connect() || err.is_timeout() => {
                ErrorPayload::message("Could not reach the server. Check your connection.")
            }
            other => ErrorPayload::message(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_pass_the_backend_payload_through() {
        let payload = ErrorPayload::message("Unauthenticated.");
        let err = ApiError::Status {
            status: 401,
            payload: payload.clone(),
        };
        assert_eq!(ErrorPayload::from(err), payload);
    }

    #[test]
    fn attachment_errors_become_messages() {
        let err = ApiError::Attachment {
            path: "/nope/id.png".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let payload = ErrorPayload::from(err);
        assert!(payload.headline().contains("/nope/id.png"));
    }
}
