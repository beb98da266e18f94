//! Batch balance orchestration
//!
//! Fans one fetch out per wallet, throttled or concurrent, waits for every
//! outstanding fetch, and restores the caller's input order before
//! returning. Both modes run through the same collection and reordering
//! path; the only difference is how fetches are issued.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::api::EthplorerClient;
use crate::balances::fetcher::{EthplorerFetcher, WalletFetch, WalletFetcher};
use crate::log_info;
use crate::types::Wallet;

/// Fetch balances for every wallet and return the outcomes in input-address
/// order.
///
/// With `throttle: Some(delay)`, fetches are strictly serialized: one
/// completes, the engine sleeps `delay`, then the next is issued. With
/// `None`, fetches run concurrently and are collected over a channel as
/// they complete. Either way nothing is returned until every fetch has
/// finished.
///
/// A wallet whose fetch produced no result (e.g. the task died) is omitted,
/// so the output can be shorter than the input; relative order always
/// matches the input.
pub async fn load_wallet_fetches(
    fetcher: Arc<dyn WalletFetcher>,
    wallets: Vec<Wallet>,
    throttle: Option<Duration>,
) -> Vec<WalletFetch> {
    log_info!(
        "balances",
        "loading wallet balances",
        count = wallets.len(),
        throttled = throttle.is_some()
    );

    let collected = match throttle {
        Some(delay) => fetch_serialized(fetcher, &wallets, delay).await,
        None => fetch_concurrent(fetcher, &wallets).await,
    };

    restore_input_order(&wallets, collected)
}

/// Fetch balances for every wallet and return the wallets in input-address
/// order. Wallets whose fetch failed pass through unmodified; use
/// [`load_wallet_fetches`] when the per-wallet outcome matters.
pub async fn load_wallet_balances(
    fetcher: Arc<dyn WalletFetcher>,
    wallets: Vec<Wallet>,
    throttle: Option<Duration>,
) -> Vec<Wallet> {
    load_wallet_fetches(fetcher, wallets, throttle)
        .await
        .into_iter()
        .map(|fetch| fetch.wallet)
        .collect()
}

/// Fetch balances for every wallet against the given Ethplorer
/// configuration. Free-tier keys get the serialized, cooled-down schedule;
/// provisioned keys fan out concurrently.
pub async fn load_balances(api: &EthplorerClient, wallets: Vec<Wallet>) -> Vec<Wallet> {
    let throttle = api.throttle();
    let fetcher = Arc::new(EthplorerFetcher::new(api.clone()));
    load_wallet_balances(fetcher, wallets, throttle).await
}

/// One fetch at a time, in input order, sleeping between completions.
/// No delay trails the last fetch.
async fn fetch_serialized(
    fetcher: Arc<dyn WalletFetcher>,
    wallets: &[Wallet],
    delay: Duration,
) -> Vec<WalletFetch> {
    let mut collected = Vec::with_capacity(wallets.len());
    for (index, wallet) in wallets.iter().enumerate() {
        collected.push(fetcher.fetch_wallet(wallet.clone()).await);
        if index + 1 < wallets.len() {
            tokio::time::sleep(delay).await;
        }
    }
    collected
}

/// All fetches in flight at once, collected over a channel as they
/// complete. The channel closes once every spawned task has either sent
/// its outcome or died, so the receive loop is the wait-for-all barrier.
async fn fetch_concurrent(
    fetcher: Arc<dyn WalletFetcher>,
    wallets: &[Wallet],
) -> Vec<WalletFetch> {
    let (tx, mut rx) = mpsc::channel(wallets.len().max(1));

    for wallet in wallets.iter().cloned() {
        let fetcher = Arc::clone(&fetcher);
        let tx = tx.clone();
        tokio::spawn(async move {
            let outcome = fetcher.fetch_wallet(wallet).await;
            let _ = tx.send(outcome).await;
        });
    }
    drop(tx);

    let mut collected = Vec::with_capacity(wallets.len());
    while let Some(outcome) = rx.recv().await {
        collected.push(outcome);
    }
    collected
}

/// Reorder collected outcomes to match the input wallet order. Each input
/// address consumes at most one collected outcome; addresses with no
/// outcome are skipped.
fn restore_input_order(input: &[Wallet], mut collected: Vec<WalletFetch>) -> Vec<WalletFetch> {
    let mut ordered = Vec::with_capacity(input.len());
    for wallet in input {
        if let Some(position) = collected
            .iter()
            .position(|outcome| outcome.wallet.address == wallet.address)
        {
            ordered.push(collected.remove(position));
        }
    }
    ordered
}
