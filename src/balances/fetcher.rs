//! Single-address balance fetching
//!
//! One invocation is one network round trip: build the lookup URL, issue
//! the request, decode the payload, and map it onto the domain wallet
//! model. Every failure mode is recoverable per-address; the caller gets
//! the wallet back unmodified with `fetched = false` and the batch keeps
//! going. Retries, if wanted, belong to the orchestrator.

use async_trait::async_trait;

use crate::api::{decode_address_info, AddressInfoResponse, EthplorerClient, TokenHolding};
use crate::balances::calculator::token_figures;
use crate::error::{BalanceError, BalanceResult};
use crate::types::{Token, Wallet};
use crate::utils::shared_client;
use crate::{log_debug, log_warn};

/// Outcome of one wallet fetch. `fetched` distinguishes "the service
/// answered" from "the wallet passed through unmodified".
#[derive(Debug, Clone, PartialEq)]
pub struct WalletFetch {
    pub wallet: Wallet,
    pub fetched: bool,
}

/// Source of wallet balance data. The orchestrator only talks to this
/// trait, so tests can script a source with controlled timing and
/// failures.
#[async_trait]
pub trait WalletFetcher: Send + Sync {
    /// Fetch balances for one wallet, consuming and returning it.
    /// Implementations must not fail the batch: errors surface as
    /// `fetched = false` with the wallet unmodified.
    async fn fetch_wallet(&self, wallet: Wallet) -> WalletFetch;
}

/// Production fetcher backed by the Ethplorer address-info endpoint
#[derive(Debug, Clone)]
pub struct EthplorerFetcher {
    client: reqwest::Client,
    api: EthplorerClient,
}

impl EthplorerFetcher {
    pub fn new(api: EthplorerClient) -> Self {
        Self {
            client: shared_client(),
            api,
        }
    }

    /// Fetch the raw address-info record for one address. Failures are
    /// logged and collapse to `None`.
    pub async fn load_address_info(&self, address: &str) -> Option<AddressInfoResponse> {
        match self.try_load(address).await {
            Ok(info) => Some(info),
            Err(e) => {
                log_warn!("balances", "address info lookup failed", address = address, error = e);
                None
            }
        }
    }

    /// Fetch raw address-info records for several addresses concurrently.
    /// Failed lookups are skipped; completion order is not specified.
    pub async fn load_address_infos(&self, addresses: &[String]) -> Vec<AddressInfoResponse> {
        let (tx, mut rx) = tokio::sync::mpsc::channel(addresses.len().max(1));
        for address in addresses.iter().cloned() {
            let fetcher = self.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                if let Some(info) = fetcher.load_address_info(&address).await {
                    let _ = tx.send(info).await;
                }
            });
        }
        drop(tx);

        let mut infos = Vec::with_capacity(addresses.len());
        while let Some(info) = rx.recv().await {
            infos.push(info);
        }
        infos
    }

    async fn try_load(&self, address: &str) -> BalanceResult<AddressInfoResponse> {
        let url = self.api.address_info_url(address)?;

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BalanceError::network_error(format!(
                "service returned status {}",
                status
            )));
        }

        let body = response.bytes().await?;
        Ok(decode_address_info(&body)?)
    }
}

#[async_trait]
impl WalletFetcher for EthplorerFetcher {
    async fn fetch_wallet(&self, wallet: Wallet) -> WalletFetch {
        match self.try_load(&wallet.address).await {
            Ok(info) => {
                log_debug!("balances", "address fetched", address = wallet.address);
                WalletFetch {
                    wallet: apply_address_info(wallet, &info),
                    fetched: true,
                }
            }
            Err(e) => {
                log_warn!("balances", "address fetch failed", address = wallet.address, error = e);
                WalletFetch {
                    wallet,
                    fetched: false,
                }
            }
        }
    }
}

/// Fill a wallet from a decoded address-info record, preserving the
/// service's token order.
pub(crate) fn apply_address_info(mut wallet: Wallet, info: &AddressInfoResponse) -> Wallet {
    wallet.balance = info.eth.as_ref().and_then(|eth| eth.balance);
    wallet.tokens = info.tokens.iter().map(token_from_holding).collect();
    wallet
}

fn token_from_holding(holding: &TokenHolding) -> Token {
    let info = holding.token_info.as_ref();
    let decimals = info.and_then(|i| i.decimals);
    let rate = info.and_then(|i| i.price.rate());
    let figures = token_figures(holding.balance, decimals, rate);

    Token {
        address: info.and_then(|i| i.address.clone()),
        name: info.and_then(|i| i.name.clone()),
        symbol: info.and_then(|i| i.symbol.clone()),
        decimals,
        raw_balance: holding.balance,
        crypto_balance: figures.crypto_balance,
        fiat_balance: figures.fiat_balance,
        fiat_rate: rate,
        fiat_currency: info.and_then(|i| i.price.currency().map(str::to_string)),
    }
}
