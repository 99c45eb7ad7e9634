use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

use crate::connectors::ConnectorError;
use crate::helpers::JsonResponse;

/// Failures of the review operations
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    /// The payload broke a review invariant; nothing was stored
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    #[error("Review not found with id {0}")]
    NotFound(i64),
    /// User Service could not be asked about the author
    #[error("User Service lookup failed: {0}")]
    Transport(#[from] ConnectorError),
    #[error("Storage error: {0}")]
    Store(String),
}

impl ReviewError {
    pub(crate) fn validation(field: &'static str, message: &str) -> Self {
        Self::Validation {
            field,
            message: message.to_string(),
        }
    }
}

impl ResponseError for ReviewError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Transport(err) => err.status_code(),
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            Self::Store(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        };

        JsonResponse::new(self.status_code(), &message).to_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            ReviewError::validation("rating", "Rating must be between 1 and 5.").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ReviewError::NotFound(1).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ReviewError::from(ConnectorError::ServiceUnavailable("down".into())).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ReviewError::from(ConnectorError::HttpError("500".into())).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ReviewError::Store("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_message_names_the_id() {
        assert_eq!(
            ReviewError::NotFound(42).to_string(),
            "Review not found with id 42"
        );
    }
}
