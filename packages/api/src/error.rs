//! Error type for backend calls.
//!
//! The categories stay distinct so views can surface the backend's own
//! message and treat a 401 as a session problem rather than a network blip.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// No bearer token in the session; the call was never issued.
    #[error("not signed in")]
    NotAuthenticated,

    /// The backend rejected the token (401/403).
    #[error("session expired, please sign in again")]
    Unauthorized,

    /// Non-2xx response; carries the backend's message when it sent one.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// Transport-level failure (DNS, connection reset, fetch rejection).
    #[error("network error, please try again")]
    Network(#[from] reqwest::Error),

    /// The response body did not match the pinned schema.
    #[error("unexpected response from server")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    /// True when retrying the same request might succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network(_)) || matches!(self, Self::Backend { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_displays_server_message() {
        let err = ApiError::Backend {
            status: 400,
            message: "Insufficient balance".into(),
        };
        assert_eq!(err.to_string(), "Insufficient balance");
    }

    #[test]
    fn transient_classification() {
        assert!(ApiError::Backend { status: 503, message: "unavailable".into() }.is_transient());
        assert!(!ApiError::Backend { status: 400, message: "bad".into() }.is_transient());
        assert!(!ApiError::Unauthorized.is_transient());
    }
}
