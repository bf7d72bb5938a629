pub mod wallet;

use crate::models::wallets::{NewWallet, Wallet, WalletChanges, WalletType};

/// Storage for wallets. Implemented for [`sqlx::PgPool`] in [`wallet`].
#[async_trait::async_trait]
pub trait WalletStore: Send + Sync {
    /// Fetches all wallets, optionally only those of the given type
    async fn wallets(&self, wallet_type: Option<WalletType>) -> sqlx::Result<Vec<Wallet>>;

    async fn wallet_by_id(&self, id: i32) -> sqlx::Result<Option<Wallet>>;

    /// Fetches every wallet owned by a user
    async fn wallets_by_user_id(&self, user_id: i32) -> sqlx::Result<Vec<Wallet>>;

    async fn create_wallet(&self, wallet: NewWallet) -> sqlx::Result<Wallet>;

    /// Returns `None` if no wallet has the given id
    async fn update_wallet(&self, id: i32, changes: WalletChanges) -> sqlx::Result<Option<Wallet>>;

    /// Returns whether a wallet was deleted
    async fn delete_wallet(&self, id: i32) -> sqlx::Result<bool>;
}
