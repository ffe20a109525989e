// Route exports
pub mod basics;
pub mod rules;

use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use thiserror::Error;

use crate::config::BasicsSettings;
use crate::core::{ThresholdResponder, UnknownRule};
use crate::models::{ErrorResponse, InputValidationError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub responder: ThresholdResponder,
    pub basics: BasicsSettings,
}

/// Errors surfaced by the HTTP adapter
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] InputValidationError),

    #[error(transparent)]
    UnknownRule(#[from] UnknownRule),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "invalid_input",
            ApiError::UnknownRule(_) => "unknown_rule",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::UnknownRule(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// Register every route. Each catalog rule is served at its own path.
pub fn configure_routes(cfg: &mut web::ServiceConfig, responder: &ThresholdResponder) {
    cfg.configure(basics::configure)
        .configure(|cfg| rules::configure(cfg, responder));
}
