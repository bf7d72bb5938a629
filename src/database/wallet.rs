use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::database::WalletStore;
use crate::models::wallets::{NewWallet, Wallet, WalletChanges, WalletType};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Model {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub wallet_name: String,
    pub wallet_type: String,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
}

fn into_wallet(model: Model) -> sqlx::Result<Wallet> {
    Wallet::try_from(model).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

fn into_wallets(models: Vec<Model>) -> sqlx::Result<Vec<Wallet>> {
    models.into_iter().map(into_wallet).collect()
}

#[async_trait]
impl WalletStore for PgPool {
    async fn wallets(&self, wallet_type: Option<WalletType>) -> sqlx::Result<Vec<Wallet>> {
        let models: Vec<Model> = match wallet_type {
            Some(ty) => {
                let q = "SELECT * FROM user_wallet WHERE wallet_type = $1 ORDER BY id";
                sqlx::query_as(q).bind(ty.as_str()).fetch_all(self).await?
            }
            None => {
                let q = "SELECT * FROM user_wallet ORDER BY id";
                sqlx::query_as(q).fetch_all(self).await?
            }
        };

        into_wallets(models)
    }

    async fn wallet_by_id(&self, id: i32) -> sqlx::Result<Option<Wallet>> {
        let q = "SELECT * FROM user_wallet WHERE id = $1";

        let model: Option<Model> = sqlx::query_as(q).bind(id).fetch_optional(self).await?;
        model.map(into_wallet).transpose()
    }

    async fn wallets_by_user_id(&self, user_id: i32) -> sqlx::Result<Vec<Wallet>> {
        let q = "SELECT * FROM user_wallet WHERE user_id = $1 ORDER BY id";

        let models = sqlx::query_as(q).bind(user_id).fetch_all(self).await?;
        into_wallets(models)
    }

    #[tracing::instrument(skip(self))]
    async fn create_wallet(&self, wallet: NewWallet) -> sqlx::Result<Wallet> {
        let q = r#"
        INSERT INTO user_wallet (user_id, user_name, wallet_name, wallet_type, balance, created_at)
        VALUES ($1, $2, $3, $4, $5, NOW())
        RETURNING *;
        "#;

        let model: Model = sqlx::query_as(q)
            .bind(wallet.user_id)
            .bind(&wallet.user_name)
            .bind(&wallet.wallet_name)
            .bind(wallet.wallet_type.as_str())
            .bind(wallet.balance)
            .fetch_one(self)
            .await?;

        tracing::info!("Created wallet {} for user {}", model.id, model.user_id);

        into_wallet(model)
    }

    async fn update_wallet(&self, id: i32, changes: WalletChanges) -> sqlx::Result<Option<Wallet>> {
        let q = r#"
        UPDATE user_wallet
        SET
            wallet_name = $1,
            wallet_type = $2,
            balance = COALESCE($3, balance)
        WHERE id = $4
        RETURNING *;
        "#;

        let model: Option<Model> = sqlx::query_as(q)
            .bind(&changes.wallet_name)
            .bind(changes.wallet_type.as_str())
            .bind(changes.balance)
            .bind(id)
            .fetch_optional(self)
            .await?;

        model.map(into_wallet).transpose()
    }

    async fn delete_wallet(&self, id: i32) -> sqlx::Result<bool> {
        let q = "DELETE FROM user_wallet WHERE id = $1";

        let result = sqlx::query(q).bind(id).execute(self).await?;
        Ok(result.rows_affected() > 0)
    }
}
