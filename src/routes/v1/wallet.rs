use actix_web::{HttpResponse, delete, get, http::StatusCode, post, put, web};
use serde_json::json;

use crate::AppState;
use crate::errors::{AppError, ServiceError};
use crate::models::responses::ApiResponse;
use crate::models::wallets::{
    CreateWalletReq, NewWallet, UpdateWalletReq, WalletChanges, WalletQuery, parse_wallet_type,
};

fn wallet_not_found() -> AppError {
    AppError::not_found("Wallet not found")
}

#[get("")]
async fn wallet_list(
    state: web::Data<AppState>,
    query: web::Query<WalletQuery>,
) -> Result<HttpResponse, ServiceError> {
    let wallet_type = match query.into_inner().wallet_type.as_deref() {
        None | Some("") => None,
        Some(ty) => Some(parse_wallet_type(ty)?),
    };

    let wallets = state.store.wallets(wallet_type).await?;

    Ok(ApiResponse::success(wallets))
}

#[get("/{id}")]
async fn wallet_get(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let id = id.into_inner();

    let wallet = state
        .store
        .wallet_by_id(id)
        .await?
        .ok_or_else(wallet_not_found)?;

    Ok(ApiResponse::success(wallet))
}

#[post("")]
async fn wallet_create(
    state: web::Data<AppState>,
    req: web::Json<CreateWalletReq>,
) -> Result<HttpResponse, ServiceError> {
    let req = req.into_inner();
    state.validator.validate(&req)?;

    let new_wallet = NewWallet::try_from(req)?;
    let wallet = state.store.create_wallet(new_wallet).await?;

    Ok(ApiResponse::success_with(wallet, StatusCode::CREATED))
}

#[put("/{id}")]
async fn wallet_update(
    state: web::Data<AppState>,
    id: web::Path<i32>,
    req: web::Json<UpdateWalletReq>,
) -> Result<HttpResponse, ServiceError> {
    let id = id.into_inner();
    let req = req.into_inner();
    state.validator.validate(&req)?;

    let changes = WalletChanges::try_from(req)?;
    let wallet = state
        .store
        .update_wallet(id, changes)
        .await?
        .ok_or_else(wallet_not_found)?;

    Ok(ApiResponse::success(wallet))
}

#[delete("/{id}")]
async fn wallet_delete(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let id = id.into_inner();

    if !state.store.delete_wallet(id).await? {
        return Err(wallet_not_found().into());
    }

    tracing::info!("Deleted wallet {id}");

    Ok(ApiResponse::success(json!({ "id": id })))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/wallets")
            .service(wallet_list)
            .service(wallet_create)
            .service(wallet_get)
            .service(wallet_update)
            .service(wallet_delete),
    );
}
