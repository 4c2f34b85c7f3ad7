use serde::Serialize;
use thiserror::Error;

/// Unified error type for everything that can go wrong while talking to the
/// recipe backend.
///
/// Every variant except [`InvalidConfig`](Self::InvalidConfig) is a
/// transport-or-server failure: the list controller treats them all the same
/// way (clear the rows, zero the total, show the connection error screen).
/// An empty result set is never an error.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum BrowserError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("Network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The backend answered with a non-success status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Response status code.
        status: u16,
        /// Response body, abbreviated for display.
        body: String,
    },

    /// The response body did not match `{data, total}`.
    #[error("Parse error: {detail}")]
    Parse {
        /// Details about the parse failure.
        detail: String,
    },

    /// The configured base URL or another setting is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl BrowserError {
    /// Whether this error came from a fetch (network, status or body).
    ///
    /// **Please update this method when new variants are added.**
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Timeout { .. } | Self::HttpStatus { .. } | Self::Parse { .. }
        )
    }
}

/// Result type alias using [`BrowserError`].
pub type BrowserResult<T> = std::result::Result<T, BrowserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_are_classified() {
        assert!(BrowserError::Network { detail: "refused".into() }.is_transport());
        assert!(BrowserError::Timeout { detail: "10s".into() }.is_transport());
        assert!(BrowserError::HttpStatus { status: 500, body: String::new() }.is_transport());
        assert!(BrowserError::Parse { detail: "eof".into() }.is_transport());
        assert!(!BrowserError::InvalidConfig("empty url".into()).is_transport());
    }

    #[test]
    fn display_includes_status() {
        let e = BrowserError::HttpStatus {
            status: 503,
            body: "maintenance".into(),
        };
        assert_eq!(e.to_string(), "HTTP 503: maintenance");
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = BrowserError::Network {
            detail: "refused".into(),
        };
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["code"], "Network");
        assert_eq!(json["details"]["detail"], "refused");
    }
}
