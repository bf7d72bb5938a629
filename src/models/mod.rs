pub mod responses;
pub mod wallets;
