use serde_json::Value;
use thiserror::Error;

/// Main error type for JsonBank API operations
#[derive(Debug, Error)]
pub enum JsbError {
    /// Error reported by the JsonBank API
    #[error("JsonBank API error: {message}")]
    Api {
        message: String,
        code: Option<String>,
        status: u16,
    },

    /// HTTP error whose body was not a recognizable API error payload
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    /// A private key is required for this operation
    #[error("private key required but not configured")]
    NoPrivateKey,

    /// No API keys were configured on the client
    #[error("no API keys configured")]
    NoKeys,

    /// Required environment variable is missing
    #[error("missing environment variable: {0}")]
    MissingEnv(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl JsbError {
    /// Create an error from a non-2xx response body.
    ///
    /// The API reports failures as `{"error": {"code": ..., "message": ...}}`;
    /// anything else becomes an opaque HTTP error carrying the raw body.
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        if let Ok(value) = serde_json::from_slice::<Value>(body) {
            if let Some(error) = value.get("error") {
                let message = error
                    .get("message")
                    .and_then(|m| m.as_str())
                    .unwrap_or("unknown error")
                    .to_string();

                let code = error.get("code").map(|c| match c {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                });

                return JsbError::Api {
                    message,
                    code,
                    status,
                };
            }
        }

        JsbError::Http {
            status,
            body: String::from_utf8_lossy(body).to_string(),
        }
    }

    /// Check if this error is a not found error (404)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            JsbError::Api { status: 404, .. } | JsbError::Http { status: 404, .. }
        )
    }

    /// Check if this error is an authentication failure (401)
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            JsbError::Api { status: 401, .. } | JsbError::Http { status: 401, .. }
        )
    }

    /// Get the HTTP status code if this error came from a response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            JsbError::Api { status, .. } => Some(*status),
            JsbError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for JsonBank operations
pub type Result<T> = std::result::Result<T, JsbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_body_api_error() {
        let body = br#"{"error": {"code": "notFound", "message": "File not found!"}}"#;
        let error = JsbError::from_body(404, body);

        match error {
            JsbError::Api {
                message,
                code,
                status,
            } => {
                assert_eq!(message, "File not found!");
                assert_eq!(code.as_deref(), Some("notFound"));
                assert_eq!(status, 404);
            }
            other => panic!("expected JsbError::Api, got {:?}", other),
        }
    }

    #[test]
    fn test_from_body_numeric_code() {
        let body = br#"{"error": {"code": 401, "message": "Invalid public key"}}"#;
        let error = JsbError::from_body(401, body);

        match error {
            JsbError::Api { code, .. } => assert_eq!(code.as_deref(), Some("401")),
            other => panic!("expected JsbError::Api, got {:?}", other),
        }
    }

    #[test]
    fn test_from_body_unparseable() {
        let body = b"<html>Bad Gateway</html>";
        let error = JsbError::from_body(502, body);

        match error {
            JsbError::Http { status, body } => {
                assert_eq!(status, 502);
                assert!(body.contains("Bad Gateway"));
            }
            other => panic!("expected JsbError::Http, got {:?}", other),
        }
    }

    #[test]
    fn test_is_not_found() {
        let error = JsbError::from_body(404, br#"{"error": {"message": "missing"}}"#);
        assert!(error.is_not_found());
        assert!(!error.is_unauthorized());
        assert_eq!(error.status_code(), Some(404));
    }
}
