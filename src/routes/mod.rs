mod not_found;
pub mod v1;

use actix_web::{Error, HttpRequest, error, web};

use crate::errors::AppError;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));
    cfg.app_data(web::PathConfig::default().error_handler(path_error_handler));
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler));

    cfg.service(web::scope("/api/v1").configure(v1::config));
    cfg.default_service(web::route().to(not_found::not_found));
}

// Binding errors carry client input in their messages, so they are replaced
// with fixed ones. Logging is left to the dispatch middleware.

fn json_error_handler(_err: error::JsonPayloadError, _req: &HttpRequest) -> Error {
    AppError::validation("Invalid request body").into()
}

fn path_error_handler(_err: error::PathError, _req: &HttpRequest) -> Error {
    AppError::validation("Invalid path parameter").into()
}

fn query_error_handler(_err: error::QueryPayloadError, _req: &HttpRequest) -> Error {
    AppError::validation("Invalid query parameters").into()
}
