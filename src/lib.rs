//! Balance Core Library
//!
//! Balance aggregation engine: given a set of blockchain addresses, it
//! retrieves each address's native-coin balance and token holdings from
//! the Ethplorer lookup service, tolerates the schema irregularities of
//! that service, derives per-token crypto and fiat figures, and returns
//! results in input order regardless of network timing.
//!
//! # Architecture
//!
//! This crate provides:
//! - **api**: Ethplorer client configuration and defensive wire decoding
//! - **balances**: figure derivation, per-address fetching, and batch
//!   orchestration
//! - **types**: the wallet/token domain model handed back to callers
//! - **utils**: shared HTTP client, lenient JSON readers, logging
//!
//! # Example
//!
//! ```rust,ignore
//! use balance_core::{load_balances, EthplorerClient, Wallet};
//!
//! let api = EthplorerClient::new(); // free tier, serialized fetches
//! let wallets = vec![Wallet::new("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045")];
//! let wallets = load_balances(&api, wallets).await;
//! ```

pub mod api;
pub mod balances;
pub mod error;
pub mod types;
pub mod utils;

// Re-export key types for convenience
pub use error::{BalanceError, BalanceResult, ErrorCode};
pub use types::{Token, Wallet};

pub use api::{
    decode_address_info, AddressInfoResponse, DecodeError, EthBalance, EthplorerClient,
    PriceField, TokenHolding, TokenInfo, TokenPrice, ETHPLORER_API_BASE, FREE_API_KEY,
    FREE_TIER_COOLDOWN,
};

pub use balances::{
    load_balances, load_wallet_balances, load_wallet_fetches, token_figures, EthplorerFetcher,
    TokenFigures, WalletFetch, WalletFetcher,
};
