/*
[INPUT]:  Error sources (configuration, HTTP status, transport, decoding)
[OUTPUT]: One normalized error shape (message, status, data) for every failed call
[POS]:    Error handling layer - unified error type for entire crate
[UPDATE]: When adding new error sources or changing normalization rules
*/

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Message reported when a request went out but no response came back
pub const NO_RESPONSE_MESSAGE: &str = "No response received from server";

/// Main error type for the Biteship adapter
#[derive(Error, Debug)]
pub enum BiteshipError {
    /// Client configuration is invalid (raised before any network call)
    #[error("Configuration error: {0}")]
    Config(String),

    /// API responded with a non-2xx status
    #[error("API error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
        data: Option<Value>,
    },

    /// Request was sent but no response arrived (timeout, refused, reset)
    #[error("{}", NO_RESPONSE_MESSAGE)]
    NoResponse(#[source] reqwest::Error),

    /// Request could not be built or sent
    #[error("Invalid request: {0}")]
    Request(String),

    /// A 2xx body did not match the expected shape
    #[error("Invalid response (status {status}): {message}")]
    Decode {
        status: u16,
        message: String,
        body: String,
    },
}

impl BiteshipError {
    /// Human readable message of the normalized error
    pub fn message(&self) -> &str {
        match self {
            BiteshipError::Config(message) | BiteshipError::Request(message) => message.as_str(),
            BiteshipError::Api { message, .. } | BiteshipError::Decode { message, .. } => {
                message.as_str()
            }
            BiteshipError::NoResponse(_) => NO_RESPONSE_MESSAGE,
        }
    }

    /// HTTP status of the failed call, 0 when no response was received
    pub fn status(&self) -> u16 {
        match self {
            BiteshipError::Api { status, .. } | BiteshipError::Decode { status, .. } => *status,
            _ => 0,
        }
    }

    /// Raw response body for API errors
    pub fn data(&self) -> Option<&Value> {
        match self {
            BiteshipError::Api { data, .. } => data.as_ref(),
            _ => None,
        }
    }

    /// Check if the remote API rejected the call
    pub fn is_api_error(&self) -> bool {
        matches!(self, BiteshipError::Api { .. })
    }

    /// Check if the remote API answered 404
    ///
    /// Expected on tracking lookups for shipments the courier has not
    /// registered yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BiteshipError::Api { status: 404, .. })
    }

    /// Check if the call failed without any response from the server
    pub fn is_network_error(&self) -> bool {
        matches!(self, BiteshipError::NoResponse(_))
    }

    /// Create an API error from a non-2xx status and its raw body
    ///
    /// The message comes from the body's `message` field when present,
    /// otherwise `fallback` (the transport's own status error text).
    pub fn api_error(status: StatusCode, body: &str, fallback: impl Into<String>) -> Self {
        let data: Option<Value> = if body.trim().is_empty() {
            None
        } else {
            Some(serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string())))
        };

        let message = data
            .as_ref()
            .and_then(|value| value.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| fallback.into());

        BiteshipError::Api {
            status: status.as_u16(),
            message,
            data,
        }
    }

    /// Classify an error returned while sending a request
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_builder() {
            BiteshipError::Request(err.to_string())
        } else {
            BiteshipError::NoResponse(err)
        }
    }
}

impl From<url::ParseError> for BiteshipError {
    fn from(err: url::ParseError) -> Self {
        BiteshipError::Request(err.to_string())
    }
}

/// Result type alias for Biteship operations
pub type Result<T> = std::result::Result<T, BiteshipError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_uses_body_message() {
        let err = BiteshipError::api_error(
            StatusCode::NOT_FOUND,
            r#"{"success":false,"message":"not found","code":40002001}"#,
            "HTTP status client error (404 Not Found)",
        );

        assert_eq!(err.status(), 404);
        assert_eq!(err.message(), "not found");
        assert_eq!(
            err.data(),
            Some(&json!({"success": false, "message": "not found", "code": 40002001}))
        );
        assert!(err.is_api_error());
        assert!(err.is_not_found());
    }

    #[test]
    fn test_api_error_falls_back_without_message() {
        let err = BiteshipError::api_error(
            StatusCode::BAD_REQUEST,
            r#"{"success":false,"error":"bad"}"#,
            "HTTP status client error (400 Bad Request)",
        );

        assert_eq!(err.status(), 400);
        assert_eq!(err.message(), "HTTP status client error (400 Bad Request)");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_api_error_non_string_message_falls_back() {
        let err = BiteshipError::api_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"message":{"field":"items"}}"#,
            "fallback",
        );
        assert_eq!(err.message(), "fallback");
    }

    #[test]
    fn test_api_error_keeps_plain_text_body() {
        let err = BiteshipError::api_error(StatusCode::BAD_GATEWAY, "upstream down", "fallback");

        assert_eq!(err.message(), "fallback");
        assert_eq!(err.data(), Some(&Value::String("upstream down".to_string())));
    }

    #[test]
    fn test_api_error_empty_body_has_no_data() {
        let err = BiteshipError::api_error(StatusCode::INTERNAL_SERVER_ERROR, "", "fallback");
        assert!(err.data().is_none());
        assert_eq!(err.status(), 500);
    }

    #[test]
    fn test_non_api_errors_report_status_zero() {
        let config = BiteshipError::Config("API key is required".to_string());
        assert_eq!(config.status(), 0);
        assert_eq!(config.message(), "API key is required");
        assert!(config.data().is_none());
        assert!(!config.is_network_error());

        let request = BiteshipError::Request("relative URL without a base".to_string());
        assert_eq!(request.status(), 0);
        assert_eq!(request.message(), "relative URL without a base");
    }

    #[test]
    fn test_decode_error_keeps_status() {
        let err = BiteshipError::Decode {
            status: 200,
            message: "missing field `success`".to_string(),
            body: "{}".to_string(),
        };
        assert_eq!(err.status(), 200);
        assert!(!err.is_api_error());
        assert!(err.data().is_none());
    }
}
