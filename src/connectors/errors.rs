use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::fmt;

/// Errors that can occur during external service communication
#[derive(Debug)]
pub enum ConnectorError {
    /// HTTP request/response error
    HttpError(String),
    /// Service unreachable or timeout
    ServiceUnavailable(String),
    /// Invalid response format from external service
    InvalidResponse(String),
    /// Internal error in connector
    Internal(String),
}

impl fmt::Display for ConnectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpError(msg) => write!(f, "HTTP error: {}", msg),
            Self::ServiceUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
            Self::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ConnectorError {}

impl ResponseError for ConnectorError {
    fn error_response(&self) -> HttpResponse {
        let message = match self {
            Self::HttpError(_) => "External service error",
            Self::ServiceUnavailable(_) => "Service unavailable",
            Self::InvalidResponse(_) => "Invalid external service response",
            Self::Internal(_) => "Internal error",
        };

        HttpResponse::build(self.status_code()).json(json!({
            "error": message,
            "details": self.to_string(),
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::HttpError(_) => StatusCode::BAD_GATEWAY,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for ConnectorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::ServiceUnavailable(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            Self::ServiceUnavailable(format!("Connection failed: {}", err))
        } else if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}
