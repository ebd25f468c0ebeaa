use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::OnceLock;
use thiserror::Error;

/// Whether 5xx responses may carry the underlying error in a `details`
/// field. Set once at startup from the service configuration; defaults to
/// terse bodies when never set.
static VERBOSE_ERRORS: OnceLock<bool> = OnceLock::new();

pub fn set_verbose_errors(enabled: bool) {
    // Repeated calls (e.g. one per test application) keep the first value.
    let _ = VERBOSE_ERRORS.set(enabled);
}

fn verbose_errors() -> bool {
    VERBOSE_ERRORS.get().copied().unwrap_or(false)
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(anyhow::Error),

    #[error("Not found: {0}")]
    NotFound(anyhow::Error),

    #[error("Conflict: {0}")]
    Conflict(anyhow::Error),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::InternalError(_) | AppError::ConfigError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            details: Option<String>,
        }

        let status = self.status();

        let (error_message, details) = match self {
            AppError::ValidationError(err) => {
                ("Validation error".to_string(), Some(err.to_string()))
            }
            AppError::BadRequest(err) => (err.to_string(), None),
            AppError::NotFound(err) => (err.to_string(), None),
            AppError::Conflict(err) => (err.to_string(), None),
            AppError::InternalError(err) => (
                "Internal server error".to_string(),
                verbose_errors().then(|| format!("{:#}", err)),
            ),
            AppError::ConfigError(err) => (
                "Configuration error".to_string(),
                verbose_errors().then(|| format!("{:#}", err)),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                error: error_message,
                details,
            }),
        )
            .into_response()
    }
}
