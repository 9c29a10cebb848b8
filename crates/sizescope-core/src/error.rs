//! Error types for report loading and parsing.

use thiserror::Error;

/// Errors that can occur while loading a size report.
///
/// Payloads are plain strings so the error stays `Clone`, which lets it flow
/// through reactive state on the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("Network error: {0}")]
    Network(String),

    /// The server responded with a non-success status code.
    #[error("Request failed with status {0}")]
    Http(u16),

    /// The response body was not a valid size report.
    #[error("Invalid report: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ReportError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(
            ReportError::Http(404).to_string(),
            "Request failed with status 404"
        );
    }

    #[test]
    fn test_parse_error_from_serde() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let report_err = ReportError::from(err);
        assert!(matches!(report_err, ReportError::Parse(_)));
    }
}
