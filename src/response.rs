use reqwest::header::HeaderMap;
use reqwest::StatusCode;

use crate::client::RawResponse;
use crate::utils::error::{ApiError, Result};

/// Full response from a `*_detailed` call: the status, headers and raw body
/// of the exchange, plus the decoded payload for a documented success status.
///
/// `parsed` is `None` only when the server answered with an undocumented
/// status code and the client was built with
/// `error_on_unexpected_status(false)`.
#[derive(Debug, Clone)]
pub struct Response<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub content: Vec<u8>,
    pub parsed: Option<T>,
}

/// Outcome of an endpoint's status-keyed parser. Documented error statuses
/// short-circuit with `Err` before this is ever constructed.
pub(crate) enum Parsed<T> {
    Value(T),
    Unexpected,
}

pub(crate) fn build_response<T>(
    error_on_unexpected_status: bool,
    raw: RawResponse,
    parse: impl FnOnce(StatusCode, &[u8]) -> Result<Parsed<T>>,
) -> Result<Response<T>> {
    match parse(raw.status, &raw.content)? {
        Parsed::Value(value) => Ok(Response {
            status: raw.status,
            headers: raw.headers,
            content: raw.content,
            parsed: Some(value),
        }),
        Parsed::Unexpected => {
            if error_on_unexpected_status {
                tracing::warn!("unexpected status code: {}", raw.status);
                Err(ApiError::UnexpectedStatus {
                    status: raw.status,
                    content: raw.content,
                })
            } else {
                Ok(Response {
                    status: raw.status,
                    headers: raw.headers,
                    content: raw.content,
                    parsed: None,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: StatusCode, body: &[u8]) -> RawResponse {
        RawResponse {
            status,
            headers: HeaderMap::new(),
            content: body.to_vec(),
        }
    }

    fn parse_ok_only(status: StatusCode, body: &[u8]) -> Result<Parsed<i32>> {
        match status.as_u16() {
            200 => Ok(Parsed::Value(serde_json::from_slice(body)?)),
            _ => Ok(Parsed::Unexpected),
        }
    }

    #[test]
    fn test_documented_status_parses() {
        let response = build_response(true, raw(StatusCode::OK, b"7"), parse_ok_only).unwrap();
        assert_eq!(response.parsed, Some(7));
        assert_eq!(response.content, b"7");
    }

    #[test]
    fn test_unexpected_status_errors_when_configured() {
        let result = build_response(true, raw(StatusCode::IM_A_TEAPOT, b"short and stout"), parse_ok_only);
        match result {
            Err(ApiError::UnexpectedStatus { status, content }) => {
                assert_eq!(status, StatusCode::IM_A_TEAPOT);
                assert_eq!(content, b"short and stout");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_unexpected_status_yields_none_otherwise() {
        let response =
            build_response(false, raw(StatusCode::IM_A_TEAPOT, b""), parse_ok_only).unwrap();
        assert_eq!(response.parsed, None);
        assert_eq!(response.status, StatusCode::IM_A_TEAPOT);
    }
}
