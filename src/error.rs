//! Unified SDK error types.

use thiserror::Error;

/// Error kind callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Configuration,
    Validation,
    Transport,
    Semantic,
    NotFound,
    Decode,
}

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum TourApiError {
    /// No usable service key could be resolved.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A required caller parameter was missing or out of range. No request was sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The request never produced a response, even after retrying.
    #[error("Request failed after {retries} retries: {message}")]
    Transport { message: String, retries: u32 },

    /// The upstream answered with a non-success result code.
    #[error("API call failed: {message} (resultCode {code})")]
    Semantic { code: String, message: String },

    /// A single-record lookup came back empty.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A response arrived but is not a well-formed envelope.
    #[error("Invalid response (HTTP {status}): {message}")]
    Decode { status: u16, message: String },
}

impl TourApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TourApiError::Configuration(_) => ErrorKind::Configuration,
            TourApiError::Validation(_) => ErrorKind::Validation,
            TourApiError::Transport { .. } => ErrorKind::Transport,
            TourApiError::Semantic { .. } => ErrorKind::Semantic,
            TourApiError::NotFound(_) => ErrorKind::NotFound,
            TourApiError::Decode { .. } => ErrorKind::Decode,
        }
    }

    /// Upstream `resultCode`, for semantic failures.
    pub fn result_code(&self) -> Option<&str> {
        match self {
            TourApiError::Semantic { code, .. } => Some(code),
            _ => None,
        }
    }

    /// HTTP status of the response that failed to decode.
    pub fn status(&self) -> Option<u16> {
        match self {
            TourApiError::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Number of retries already attempted before giving up.
    pub fn retries(&self) -> Option<u32> {
        match self {
            TourApiError::Transport { retries, .. } => Some(*retries),
            _ => None,
        }
    }
}

/// Faults raised by a [`Transport`](crate::http::Transport) before any response arrived.
///
/// These are always treated as transient by the executor.
#[derive(Error, Debug)]
pub enum TransportError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Timeout")]
    Timeout,

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semantic_error_exposes_code() {
        let err = TourApiError::Semantic {
            code: "0022".to_string(),
            message: "LIMITED_NUMBER_OF_SERVICE_REQUESTS_EXCEEDS_ERROR".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Semantic);
        assert_eq!(err.result_code(), Some("0022"));
        assert_eq!(err.status(), None);
        assert_eq!(err.retries(), None);
        assert!(err.to_string().contains("0022"));
    }

    #[test]
    fn test_transport_error_exposes_retries() {
        let err = TourApiError::Transport {
            message: "connection refused".to_string(),
            retries: 3,
        };
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.retries(), Some(3));
        assert_eq!(err.result_code(), None);
    }

    #[test]
    fn test_decode_error_exposes_status() {
        let err = TourApiError::Decode {
            status: 503,
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.status(), Some(503));
    }
}
