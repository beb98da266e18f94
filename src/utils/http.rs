//! HTTP Client with Connection Pooling
//!
//! Provides the shared HTTP client all fetches run through:
//! - Connection pooling for better performance
//! - Request and connect timeouts
//! - A crate-identifying user agent

use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;

/// Global HTTP client instance - lazy initialized
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get the shared HTTP client. `reqwest::Client` holds its pool behind an
/// `Arc`, so the clone is cheap.
pub fn shared_client() -> Client {
    SHARED_CLIENT
        .get_or_init(|| {
            // Client construction only fails if TLS initialization fails,
            // which is a system-level issue. Using expect() here is
            // appropriate as the engine cannot function without HTTP.
            Client::builder()
                .timeout(Duration::from_secs(30))
                .connect_timeout(Duration::from_secs(10))
                .pool_idle_timeout(Duration::from_secs(90))
                .pool_max_idle_per_host(5)
                .tcp_keepalive(Duration::from_secs(60))
                .user_agent(concat!("balance-core/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("HTTP client initialization failed - check TLS configuration")
        })
        .clone()
}
