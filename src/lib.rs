use std::sync::Arc;

pub mod config;
pub mod database;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod utils;

use database::WalletStore;
use utils::validation::FieldValidator;

pub struct AppState {
    pub store: Arc<dyn WalletStore>,
    pub validator: FieldValidator,
}

impl AppState {
    pub fn new(store: Arc<dyn WalletStore>) -> Self {
        Self {
            store,
            validator: FieldValidator::new(),
        }
    }
}
