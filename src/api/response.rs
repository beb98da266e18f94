//! Address-info wire format decoding
//!
//! The balance service's responses are loosely typed: numeric fields drift
//! between number and string encodings across responses, and the `price`
//! field inside a token record may be a structured object or the boolean
//! `false` meaning "no price data". Every leaf here decodes as optional;
//! a single malformed field never fails the whole decode. Only a payload
//! that is not the expected envelope at all produces a [`DecodeError`].

use serde_json::Value;
use thiserror::Error;

use crate::utils::{get_json_f64, get_json_string, get_json_u32, get_json_u64};

/// Decode failures for payloads that are structurally unusable
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("payload is not valid JSON: {0}")]
    Malformed(String),

    #[error("payload does not match the address-info envelope: {0}")]
    Envelope(String),
}

/// Everything the service reports for one address
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddressInfoResponse {
    pub address: Option<String>,
    /// Native-coin section, absent when the service omits it
    pub eth: Option<EthBalance>,
    pub count_txs: Option<u64>,
    /// Token records in the order the service returned them
    pub tokens: Vec<TokenHolding>,
}

/// Native-coin balance section of the envelope
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EthBalance {
    pub balance: Option<f64>,
}

/// One token entry: descriptive metadata plus the raw holding
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenHolding {
    pub token_info: Option<TokenInfo>,
    /// Balance in the token's smallest unit
    pub balance: Option<f64>,
}

/// Descriptive token metadata
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenInfo {
    pub address: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    /// Sent by the service as a decimal string; malformed values read as absent
    pub decimals: Option<u32>,
    pub total_supply: Option<String>,
    pub owner: Option<String>,
    pub last_updated: Option<u64>,
    pub issuances_count: Option<u64>,
    pub holders_count: Option<u64>,
    pub eth_transfers_count: Option<u64>,
    pub price: PriceField,
}

/// Market price data for a token
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenPrice {
    pub rate: Option<f64>,
    pub diff: Option<f64>,
    pub diff7d: Option<f64>,
    pub diff30d: Option<f64>,
    pub ts: Option<u64>,
    pub market_cap_usd: Option<f64>,
    pub available_supply: Option<f64>,
    pub volume_24h: Option<f64>,
    pub currency: Option<String>,
}

/// The polymorphic `price` field: the service sends either a price object
/// or the boolean `false` when it has no market data for the token.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PriceField {
    #[default]
    Absent,
    Known(TokenPrice),
}

impl PriceField {
    /// Read the field with an ordered fallback chain: a boolean means no
    /// price data, an object is decoded leniently, anything else is absent.
    fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Bool(_)) => PriceField::Absent,
            Some(v @ Value::Object(_)) => PriceField::Known(decode_price(v)),
            _ => PriceField::Absent,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, PriceField::Absent)
    }

    pub fn rate(&self) -> Option<f64> {
        match self {
            PriceField::Known(price) => price.rate,
            PriceField::Absent => None,
        }
    }

    pub fn currency(&self) -> Option<&str> {
        match self {
            PriceField::Known(price) => price.currency.as_deref(),
            PriceField::Absent => None,
        }
    }
}

/// Decode a raw service payload into an [`AddressInfoResponse`].
///
/// Fails only when the bytes are not JSON or the top level is not an
/// object; all field-level irregularities degrade to absent fields.
pub fn decode_address_info(raw: &[u8]) -> Result<AddressInfoResponse, DecodeError> {
    let value: Value =
        serde_json::from_slice(raw).map_err(|e| DecodeError::Malformed(e.to_string()))?;

    if !value.is_object() {
        return Err(DecodeError::Envelope("expected a JSON object".to_string()));
    }

    let tokens = value
        .get("tokens")
        .and_then(|v| v.as_array())
        .map(|entries| entries.iter().map(decode_token_holding).collect())
        .unwrap_or_default();

    Ok(AddressInfoResponse {
        address: get_json_string(&value, "address"),
        eth: value.get("ETH").and_then(|v| {
            v.is_object().then(|| EthBalance {
                balance: get_json_f64(v, "balance"),
            })
        }),
        count_txs: get_json_u64(&value, "countTxs"),
        tokens,
    })
}

fn decode_token_holding(value: &Value) -> TokenHolding {
    TokenHolding {
        token_info: value
            .get("tokenInfo")
            .and_then(|v| v.is_object().then(|| decode_token_info(v))),
        balance: get_json_f64(value, "balance"),
    }
}

fn decode_token_info(value: &Value) -> TokenInfo {
    TokenInfo {
        address: get_json_string(value, "address"),
        name: get_json_string(value, "name"),
        symbol: get_json_string(value, "symbol"),
        decimals: get_json_u32(value, "decimals"),
        total_supply: get_json_string(value, "totalSupply"),
        owner: get_json_string(value, "owner"),
        last_updated: get_json_u64(value, "lastUpdated"),
        issuances_count: get_json_u64(value, "issuancesCount"),
        holders_count: get_json_u64(value, "holdersCount"),
        eth_transfers_count: get_json_u64(value, "ethTransfersCount"),
        price: PriceField::from_value(value.get("price")),
    }
}

fn decode_price(value: &Value) -> TokenPrice {
    TokenPrice {
        rate: get_json_f64(value, "rate"),
        diff: get_json_f64(value, "diff"),
        diff7d: get_json_f64(value, "diff7d"),
        diff30d: get_json_f64(value, "diff30d"),
        ts: get_json_u64(value, "ts"),
        market_cap_usd: get_json_f64(value, "marketCapUsd"),
        available_supply: get_json_f64(value, "availableSupply"),
        volume_24h: get_json_f64(value, "volume24h"),
        currency: get_json_string(value, "currency"),
    }
}
