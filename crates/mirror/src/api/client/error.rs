use reqwest::{Response, StatusCode};
use serde::Deserialize;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection, timeout, TLS)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-success status with a `{"result": ...}` body
    #[error("{message} (status {status})")]
    Remote { status: StatusCode, message: String },
    /// Non-success status without a readable body
    #[error("unknown error, status code: {}", .status.as_u16())]
    Status { status: StatusCode },
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
    #[error("base URL cannot carry a path: {0}")]
    InvalidBaseUrl(Url),
    #[error("invalid header value for {0}")]
    InvalidHeader(&'static str),
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Error body the content API sends with most failures
#[derive(Debug, Deserialize)]
struct ErrorBody {
    result: String,
}

impl ApiError {
    /// Turn an unexpected response into an error.
    ///
    /// Prefers the message from a `{"result": ...}` body and falls back to the
    /// bare status code.
    pub async fn from_response(response: Response) -> Self {
        let status = response.status();
        match response.bytes().await {
            Ok(body) => Self::from_body(status, &body),
            Err(_) => Self::Status { status },
        }
    }

    pub fn from_body(status: StatusCode, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorBody>(body) {
            Ok(err) => Self::Remote {
                status,
                message: err.result,
            },
            Err(_) => Self::Status { status },
        }
    }

    /// Status code of a rejected request, if the remote answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Remote { status, .. } | Self::Status { status } => Some(*status),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_body() {
        let err = ApiError::from_body(StatusCode::NOT_FOUND, br#"{"result":"not found"}"#);
        match &err {
            ApiError::Remote { status, message } => {
                assert_eq!(*status, StatusCode::NOT_FOUND);
                assert_eq!(message, "not found");
            }
            other => panic!("Expected Remote error, got {:?}", other),
        }
        assert_eq!(err.to_string(), "not found (status 404 Not Found)");
    }

    #[test]
    fn test_unstructured_body() {
        let err = ApiError::from_body(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>");
        assert!(matches!(err, ApiError::Status { .. }));
        assert_eq!(err.to_string(), "unknown error, status code: 502");
        assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
    }

    #[test]
    fn test_json_without_result_field() {
        let err = ApiError::from_body(StatusCode::FORBIDDEN, br#"{"error":"nope"}"#);
        assert!(matches!(err, ApiError::Status { .. }));
    }

    #[test]
    fn test_empty_body() {
        let err = ApiError::from_body(StatusCode::INTERNAL_SERVER_ERROR, b"");
        assert!(matches!(err, ApiError::Status { .. }));
    }
}
