use actix_web::{HttpResponse, http::StatusCode};
use serde_json::json;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// Typed failure surface of the service layer. Every variant except
/// `Internal` carries a caller-facing detail message; `Internal` is logged in
/// full and surfaced as a generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .iter()
            .map(|(field, errs)| {
                let code = errs.first().map(|e| e.code.as_ref()).unwrap_or("invalid");
                format!("{field}: {code}")
            })
            .collect();
        fields.sort();
        ApiError::Validation(format!("Validation failed: {}", fields.join(", ")))
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Internal(anyhow::Error::new(e))
    }
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            ApiError::Internal(e) => {
                error!(error = ?e, "Unhandled internal error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(json!({ "detail": detail }))
    }
}
