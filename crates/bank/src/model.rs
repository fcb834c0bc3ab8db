//! JSON bodies accepted by the banking routes.

use serde::Deserialize;

/// Body of `POST signup` and `POST signin`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body of `POST money`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransferRequest {
    /// Username of the receiving account
    pub to: String,
    /// Amount in minor units
    pub amount: u64,
}
