use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_derive::Serialize;

/// Body of every error answer: `{"status": "Error", "code": 404, "message": "..."}`
#[derive(Serialize, Debug, Clone)]
pub struct JsonResponse {
    pub status: String,
    pub code: u16,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct JsonResponseBuilder;

impl JsonResponse {
    pub fn build() -> JsonResponseBuilder {
        JsonResponseBuilder
    }

    pub fn new(code: StatusCode, message: &str) -> Self {
        let message = if !message.trim().is_empty() {
            message.to_string()
        } else {
            code.canonical_reason().unwrap_or("Error").to_string()
        };

        Self {
            status: "Error".to_string(),
            code: code.as_u16(),
            message,
        }
    }

    pub fn to_response(&self) -> HttpResponse {
        let code = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(code).json(self)
    }
}

impl JsonResponseBuilder {
    fn error(self, code: StatusCode, message: &str) -> actix_web::Error {
        let body = JsonResponse::new(code, message);
        let response = body.to_response();
        InternalError::from_response(body.message, response).into()
    }

    pub fn bad_request<S: AsRef<str>>(self, message: S) -> actix_web::Error {
        self.error(StatusCode::BAD_REQUEST, message.as_ref())
    }

    pub fn form_error<S: AsRef<str>>(self, message: S) -> actix_web::Error {
        self.error(StatusCode::BAD_REQUEST, message.as_ref())
    }

    pub fn not_found<S: AsRef<str>>(self, message: S) -> actix_web::Error {
        self.error(StatusCode::NOT_FOUND, message.as_ref())
    }
}
