use crate::errors::AppError;

pub async fn not_found() -> Result<actix_web::HttpResponse, AppError> {
    Err(AppError::not_found("Route not found"))
}
