//! All wallet related models

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::database::wallet;
use crate::errors::AppError;
use crate::utils::validation::{Constrained, FieldRule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WalletType {
    #[serde(rename = "Savings")]
    Savings,
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Crypto Wallet")]
    CryptoWallet,
}

impl WalletType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletType::Savings => "Savings",
            WalletType::CreditCard => "Credit Card",
            WalletType::CryptoWallet => "Crypto Wallet",
        }
    }
}

impl fmt::Display for WalletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown wallet type {0:?}")]
pub struct UnknownWalletType(pub String);

impl FromStr for WalletType {
    type Err = UnknownWalletType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Savings" => Ok(WalletType::Savings),
            "Credit Card" => Ok(WalletType::CreditCard),
            "Crypto Wallet" => Ok(WalletType::CryptoWallet),
            other => Err(UnknownWalletType(other.to_owned())),
        }
    }
}

/// Parses a wallet type coming from a client.
pub fn parse_wallet_type(s: &str) -> Result<WalletType, AppError> {
    s.parse()
        .map_err(|_| AppError::validation("Invalid wallet type"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub wallet_name: String,
    pub wallet_type: WalletType,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<wallet::Model> for Wallet {
    type Error = UnknownWalletType;

    fn try_from(value: wallet::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            user_id: value.user_id,
            user_name: value.user_name,
            wallet_name: value.wallet_name,
            wallet_type: value.wallet_type.parse()?,
            balance: value.balance,
            created_at: value.created_at,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WalletQuery {
    pub wallet_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CreateWalletReq {
    pub user_id: i32,
    pub user_name: String,
    pub wallet_name: String,
    pub wallet_type: String,
    pub balance: Option<Decimal>,
}

impl Constrained for CreateWalletReq {
    fn rules(&self) -> Vec<FieldRule<'_>> {
        vec![
            FieldRule::required("user_id", &self.user_id),
            FieldRule::required("user_name", &self.user_name),
            FieldRule::required("wallet_name", &self.wallet_name),
            FieldRule::required("wallet_type", &self.wallet_type),
            FieldRule::optional("balance", &self.balance),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UpdateWalletReq {
    pub wallet_name: String,
    pub wallet_type: String,
    pub balance: Option<Decimal>,
}

impl Constrained for UpdateWalletReq {
    fn rules(&self) -> Vec<FieldRule<'_>> {
        vec![
            FieldRule::required("wallet_name", &self.wallet_name),
            FieldRule::required("wallet_type", &self.wallet_type),
            FieldRule::optional("balance", &self.balance),
        ]
    }
}

/// A validated wallet ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWallet {
    pub user_id: i32,
    pub user_name: String,
    pub wallet_name: String,
    pub wallet_type: WalletType,
    pub balance: Decimal,
}

impl TryFrom<CreateWalletReq> for NewWallet {
    type Error = AppError;

    fn try_from(value: CreateWalletReq) -> Result<Self, Self::Error> {
        Ok(Self {
            wallet_type: parse_wallet_type(&value.wallet_type)?,
            user_id: value.user_id,
            user_name: value.user_name,
            wallet_name: value.wallet_name,
            balance: value.balance.unwrap_or_default(),
        })
    }
}

/// A validated change to an existing wallet. A missing balance is left as is.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletChanges {
    pub wallet_name: String,
    pub wallet_type: WalletType,
    pub balance: Option<Decimal>,
}

impl TryFrom<UpdateWalletReq> for WalletChanges {
    type Error = AppError;

    fn try_from(value: UpdateWalletReq) -> Result<Self, Self::Error> {
        Ok(Self {
            wallet_type: parse_wallet_type(&value.wallet_type)?,
            wallet_name: value.wallet_name,
            balance: value.balance,
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;
    use crate::utils::validation::FieldValidator;

    #[test]
    fn wallet_type_wire_names() {
        for ty in [WalletType::Savings, WalletType::CreditCard, WalletType::CryptoWallet] {
            let json = serde_json::to_value(ty).unwrap();
            assert_eq!(json, serde_json::Value::String(ty.to_string()));
            assert_eq!(ty.as_str().parse::<WalletType>(), Ok(ty));
        }
    }

    #[test]
    fn unknown_wallet_type_is_a_validation_error() {
        assert_eq!(
            parse_wallet_type("Piggy Bank"),
            Err(AppError::validation("Invalid wallet type"))
        );
        assert_eq!(parse_wallet_type("Savings"), Ok(WalletType::Savings));
    }

    #[test]
    fn empty_create_request_reports_every_required_field() {
        let req: CreateWalletReq = serde_json::from_str("{}").unwrap();
        let err = FieldValidator::new().validate(&req).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Field user_id is required, Field user_name is required, \
             Field wallet_name is required, Field wallet_type is required"
        );
    }

    #[test]
    fn create_request_converts_into_new_wallet() {
        let req: CreateWalletReq = serde_json::from_str(
            r#"{"user_id": 1, "user_name": "John Doe", "wallet_name": "John's Wallet", "wallet_type": "Credit Card"}"#,
        )
        .unwrap();
        assert!(FieldValidator::new().validate(&req).is_ok());

        let wallet = NewWallet::try_from(req).unwrap();
        assert_eq!(wallet.wallet_type, WalletType::CreditCard);
        assert_eq!(wallet.balance, dec!(0));
    }

    #[test]
    fn update_request_keeps_missing_balance_unset() {
        let req: UpdateWalletReq =
            serde_json::from_str(r#"{"wallet_name": "Rainy day", "wallet_type": "Savings"}"#).unwrap();
        let changes = WalletChanges::try_from(req).unwrap();

        assert_eq!(changes.balance, None);
        assert_eq!(changes.wallet_type, WalletType::Savings);
    }
}
