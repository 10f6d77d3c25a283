use reqwest::StatusCode;
use thiserror::Error;

use crate::models::HttpError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API error {status}: {message}")]
    Api {
        status: StatusCode,
        message: String,
        detail: HttpError,
    },

    #[error("Unexpected status code: {status}")]
    UnexpectedStatus { status: StatusCode, content: Vec<u8> },

    #[error("Configuration error: {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid config value for {field}: {value}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl ApiError {
    /// Build an [`ApiError::Api`] from a documented error response.
    ///
    /// The backend answers error statuses with either `{"message": ...}` or
    /// the richer `HttpError` shape; both decode into [`HttpError`] since
    /// every field is optional. A body that is not JSON at all still yields
    /// an error carrying the raw text.
    pub(crate) fn from_status(status: StatusCode, body: &[u8]) -> Self {
        let detail: HttpError = serde_json::from_slice(body).unwrap_or_default();
        let message = detail
            .message
            .clone()
            .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned());
        ApiError::Api {
            status,
            message,
            detail,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_with_message_body() {
        let err = ApiError::from_status(StatusCode::NOT_FOUND, br#"{"message":"hole not found"}"#);
        match err {
            ApiError::Api {
                status, message, ..
            } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(message, "hole not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_status_with_non_json_body() {
        let err = ApiError::from_status(StatusCode::BAD_GATEWAY, b"upstream exploded");
        match err {
            ApiError::Api { message, .. } => assert_eq!(message, "upstream exploded"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
