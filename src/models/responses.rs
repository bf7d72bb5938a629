use actix_web::{HttpResponse, http::StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// The body of every response the service sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    pub result: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wraps `result` as a success and responds with `200 OK`.
    pub fn success(result: T) -> HttpResponse {
        Self::success_with(result, StatusCode::OK)
    }

    pub fn success_with(result: T, status: StatusCode) -> HttpResponse {
        let response = ApiResponse {
            status: ResponseStatus::Success,
            result,
        };

        HttpResponse::build(status).json(response)
    }

    /// Wraps `result` as an error. There is no default status here, the caller
    /// always decides it.
    pub fn failure(result: T, status: StatusCode) -> HttpResponse {
        let response = ApiResponse {
            status: ResponseStatus::Error,
            result,
        };

        HttpResponse::build(status).json(response)
    }
}
