use actix_web::{HttpResponse, get, web};

use crate::AppState;
use crate::errors::ServiceError;
use crate::models::responses::ApiResponse;

#[get("/{id}/wallets")]
async fn user_wallets(
    state: web::Data<AppState>,
    user_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let user_id = user_id.into_inner();
    let wallets = state.store.wallets_by_user_id(user_id).await?;

    Ok(ApiResponse::success(wallets))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/users").service(user_wallets));
}
