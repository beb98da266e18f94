//! Shared types for the balance engine
//!
//! All data structures that cross module boundaries are defined here
//! for consistent serialization toward embedding hosts.

use serde::{Deserialize, Serialize};

/// A tracked address and everything the balance service knows about it.
///
/// Created from caller input with only `address` populated; the fetcher
/// fills in `balance` and `tokens` once a lookup succeeds. A wallet is
/// owned by exactly one fetch operation at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    /// Blockchain address, the unique lookup key
    pub address: String,
    /// Native-coin balance in human scale, unknown until fetched
    pub balance: Option<f64>,
    /// Token holdings in the order the service reported them
    #[serde(default)]
    pub tokens: Vec<Token>,
}

impl Wallet {
    /// Create a wallet record for an address that has not been looked up yet
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            balance: None,
            tokens: Vec::new(),
        }
    }
}

/// A single token holding derived from one decoded token record.
///
/// Immutable once constructed. Absent fields mean the service did not
/// report them; they are never defaulted to zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Token {
    /// Token contract address
    pub address: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    /// Decimal places between the raw integer balance and the human scale
    pub decimals: Option<u32>,
    /// Balance as reported by the service, in the token's smallest unit
    pub raw_balance: Option<f64>,
    /// `raw_balance / 10^decimals`, when both inputs are known
    pub crypto_balance: Option<f64>,
    /// `crypto_balance * fiat_rate`, when both inputs are known
    pub fiat_balance: Option<f64>,
    /// Fiat price per token unit
    pub fiat_rate: Option<f64>,
    /// Currency the rate is quoted in
    pub fiat_currency: Option<String>,
}
