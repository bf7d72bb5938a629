pub mod kind;

use std::fmt;

use actix_web::{HttpResponse, body::BoxBody, error, http::StatusCode};
use serde::Serialize;

use crate::models::responses::ApiResponse;

pub use kind::AppError;

/// Rendered in place of any error that is not a [`ClassifiedError`].
pub const UNCLASSIFIED_MESSAGE: &str = "Oops! something went wrong.";

/// An error that knows how it should be shown to a client.
///
/// Implementors must report the same `error_type` and `status` for every
/// instance of a given kind; only the message may vary.
pub trait ClassifiedError: fmt::Display {
    /// Stable kind name, sent verbatim as the `type` field.
    fn error_type(&self) -> &'static str;

    fn status(&self) -> StatusCode;
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl ServiceError {
    pub fn classified(&self) -> Option<&dyn ClassifiedError> {
        match self {
            ServiceError::App(e) => Some(e),
            ServiceError::Database(..) => None,
        }
    }
}

impl error::ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        self.classified()
            .map(|e| e.status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        render_failure(self.classified())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorPayload<'a> {
    #[serde(rename = "type")]
    pub error_type: &'a str,
    pub message: String,
}

/// Looks through an actix error for something the client may be told about.
pub fn classify(err: &error::Error) -> Option<&dyn ClassifiedError> {
    if let Some(e) = err.as_error::<AppError>() {
        return Some(e);
    }

    err.as_error::<ServiceError>()
        .and_then(ServiceError::classified)
}

pub fn render_failure(classified: Option<&dyn ClassifiedError>) -> HttpResponse {
    match classified {
        Some(e) => {
            let payload = ErrorPayload {
                error_type: e.error_type(),
                message: e.to_string(),
            };
            ApiResponse::failure(payload, e.status())
        }
        None => ApiResponse::failure(UNCLASSIFIED_MESSAGE, StatusCode::INTERNAL_SERVER_ERROR),
    }
}
