//! Catalog retrieval error types.

use thiserror::Error;

/// Failure to obtain a category's image list.
///
/// Carries no partial data. Cloneable so it can be kept in screen state and
/// forwarded in load outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum RetrievalError {
    #[error("network error while fetching images: {message}")]
    Network { message: String },

    #[error("image service returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("failed to decode image list: {message}")]
    Decode { message: String },

    #[error("failed to create catalog client: {message}")]
    Client { message: String },
}

impl RetrievalError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates non-success status error.
    #[must_use]
    pub fn status(status: u16, url: impl Into<String>) -> Self {
        Self::Status {
            status,
            url: url.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates client construction error.
    #[must_use]
    pub fn client(message: impl Into<String>) -> Self {
        Self::Client {
            message: message.into(),
        }
    }

    /// Returns the HTTP status when the service answered with a non-success code.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns whether the service answered with a non-success code.
    #[must_use]
    pub const fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code() {
        let err = RetrievalError::status(503, "http://api/images/category/nature");
        assert!(err.is_status());
        assert_eq!(err.status_code(), Some(503));
        assert!(!err.is_network_error());
    }

    #[test]
    fn test_network_has_no_status() {
        let err = RetrievalError::network("connection refused");
        assert_eq!(err.status_code(), None);
        assert!(err.is_network_error());
        assert_eq!(
            err.to_string(),
            "network error while fetching images: connection refused"
        );
    }
}
