//! Ethplorer API client configuration
//!
//! Endpoint used:
//! - /getAddressInfo/{address} - Native balance, transaction count, and
//!   token holdings for one address

use std::time::Duration;
use url::Url;

use crate::error::{BalanceError, BalanceResult};

/// Ethplorer API base URL
pub const ETHPLORER_API_BASE: &str = "https://api.ethplorer.io";

/// The shared key Ethplorer hands out for unauthenticated use. Free-tier
/// keys are rate limited and require serialized requests.
pub const FREE_API_KEY: &str = "freekey";

/// Cool-down inserted between serialized requests on the free tier
pub const FREE_TIER_COOLDOWN: Duration = Duration::from_secs(2);

/// Ethplorer API client
#[derive(Debug, Clone)]
pub struct EthplorerClient {
    /// API base URL
    pub base_url: String,
    /// API key, `freekey` unless the caller provisioned one
    pub api_key: String,
}

impl Default for EthplorerClient {
    fn default() -> Self {
        Self::new()
    }
}

impl EthplorerClient {
    /// Create a client on the free tier
    pub fn new() -> Self {
        Self {
            base_url: ETHPLORER_API_BASE.to_string(),
            api_key: FREE_API_KEY.to_string(),
        }
    }

    /// Create a client with a provisioned API key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            base_url: ETHPLORER_API_BASE.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Point the client at a different host, e.g. a staging deployment
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Whether the configured key is the shared free-tier key
    pub fn is_free_key(&self) -> bool {
        self.api_key == FREE_API_KEY
    }

    /// The inter-request delay this key requires, if any
    pub fn throttle(&self) -> Option<Duration> {
        if self.is_free_key() {
            Some(FREE_TIER_COOLDOWN)
        } else {
            None
        }
    }

    /// Build the address-info URL
    /// GET /getAddressInfo/{address}?apiKey={key}
    pub fn address_info_url(&self, address: &str) -> BalanceResult<Url> {
        if address.is_empty() {
            return Err(BalanceError::invalid_input("address must not be empty"));
        }

        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| {
                BalanceError::configuration(format!("base URL cannot take a path: {}", self.base_url))
            })?
            .push("getAddressInfo")
            .push(address);
        url.query_pairs_mut().append_pair("apiKey", &self.api_key);

        Ok(url)
    }
}
