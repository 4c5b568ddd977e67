/// Error types for calls against the remote API
use thiserror::Error;

/// Errors that can occur while fetching from the users endpoint
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, connect, TLS, timeout, malformed URL)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("API returned HTTP {status}: {body}")]
    Status {
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// The body was not a JSON array of user records
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(s) if (400..500).contains(&s))
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(s) if s >= 500)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        let not_found = ApiError::Status { status: 404, body: String::new() };
        assert!(not_found.is_client_error());
        assert!(!not_found.is_server_error());

        let boom = ApiError::Status { status: 503, body: "down".into() };
        assert!(boom.is_server_error());
        assert_eq!(boom.status(), Some(503));

        let net = ApiError::Network("connection refused".into());
        assert_eq!(net.status(), None);
        assert!(!net.is_client_error());
    }

    #[test]
    fn display_includes_status_and_body() {
        let e = ApiError::Status { status: 500, body: "oops".into() };
        assert_eq!(e.to_string(), "API returned HTTP 500: oops");
    }
}
