//! Client error types

use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed (HTTP 401)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Whether this error is an authorization failure (HTTP 401)
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Self::AuthenticationFailed(_) => true,
            Self::Request(err) => err.status() == Some(reqwest::StatusCode::UNAUTHORIZED),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_variants() {
        assert!(matches!(
            ClientError::from_status(reqwest::StatusCode::UNAUTHORIZED, "no".into()),
            ClientError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            ClientError::from_status(reqwest::StatusCode::NOT_FOUND, "gone".into()),
            ClientError::NotFound(_)
        ));
        assert!(matches!(
            ClientError::from_status(reqwest::StatusCode::BAD_GATEWAY, "upstream".into()),
            ClientError::ServerError { status: 502, .. }
        ));
    }

    #[test]
    fn only_401_is_unauthorized() {
        assert!(
            ClientError::from_status(reqwest::StatusCode::UNAUTHORIZED, String::new())
                .is_unauthorized()
        );
        assert!(
            !ClientError::from_status(reqwest::StatusCode::FORBIDDEN, String::new())
                .is_unauthorized()
        );
        assert!(!ClientError::Configuration("x".into()).is_unauthorized());
    }
}
