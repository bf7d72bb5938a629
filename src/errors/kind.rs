use actix_web::{HttpResponse, error, http::StatusCode};

use super::{ClassifiedError, render_failure};

/// Failures a handler is allowed to report to the client as-is.
///
/// The kind name and status of a variant never depend on its message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Authentication(String),

    #[error("{0}")]
    Forbidden(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }
}

impl ClassifiedError for AppError {
    fn error_type(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "ValidationError",
            AppError::NotFound(_) => "NotFoundError",
            AppError::Authentication(_) => "AuthenticationError",
            AppError::Forbidden(_) => "ForbiddenError",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Authentication(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
        }
    }
}

impl error::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        render_failure(Some(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_kinds(message: &str) -> [AppError; 4] {
        [
            AppError::validation(message),
            AppError::not_found(message),
            AppError::authentication(message),
            AppError::forbidden(message),
        ]
    }

    #[test]
    fn kind_and_status_ignore_message() {
        for (x, y) in all_kinds("x").iter().zip(all_kinds("y").iter()) {
            assert_eq!(x.error_type(), y.error_type());
            assert_eq!(x.status(), y.status());
            assert_ne!(x.to_string(), y.to_string());
        }
    }

    #[test]
    fn kind_status_pairing() {
        let pairs: Vec<_> = all_kinds("")
            .iter()
            .map(|e| (e.error_type(), e.status().as_u16()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("ValidationError", 400),
                ("NotFoundError", 404),
                ("AuthenticationError", 401),
                ("ForbiddenError", 403),
            ]
        );
    }

    #[test]
    fn message_is_displayed_verbatim() {
        let err = AppError::not_found("Wallet not found");
        assert_eq!(err.to_string(), "Wallet not found");
    }
}
