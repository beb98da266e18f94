use balance_core::{decode_address_info, token_figures};
use proptest::prelude::*;

proptest! {
    #[test]
    fn crypto_balance_tracks_raw_scaling(raw in 0.0f64..1e30, decimals in 0u32..=30) {
        let figures = token_figures(Some(raw), Some(decimals), None);
        prop_assert_eq!(figures.crypto_balance, Some(raw / 10f64.powi(decimals as i32)));
        prop_assert_eq!(figures.fiat_balance, None);
    }

    #[test]
    fn fiat_balance_is_crypto_times_rate(
        raw in 0.0f64..1e30,
        decimals in 0u32..=30,
        rate in 0.0f64..1e6,
    ) {
        let figures = token_figures(Some(raw), Some(decimals), Some(rate));
        let crypto = figures.crypto_balance.expect("both inputs present");
        prop_assert_eq!(figures.fiat_balance, Some(crypto * rate));
    }

    #[test]
    fn absence_propagates_strictly(
        raw in proptest::option::of(0.0f64..1e30),
        decimals in proptest::option::of(0u32..=30),
        rate in proptest::option::of(0.0f64..1e6),
    ) {
        let figures = token_figures(raw, decimals, rate);

        prop_assert_eq!(
            figures.crypto_balance.is_some(),
            raw.is_some() && decimals.is_some()
        );
        prop_assert_eq!(
            figures.fiat_balance.is_some(),
            figures.crypto_balance.is_some() && rate.is_some()
        );
    }

    #[test]
    fn derivation_is_deterministic(
        raw in proptest::option::of(0.0f64..1e30),
        decimals in proptest::option::of(0u32..=30),
        rate in proptest::option::of(0.0f64..1e6),
    ) {
        let first = token_figures(raw, decimals, rate);
        let second = token_figures(raw, decimals, rate);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn decimal_strings_decode_leniently(decimals in 0u32..=255) {
        let payload = serde_json::json!({
            "tokens": [
                { "tokenInfo": { "decimals": decimals.to_string() }, "balance": 1 }
            ]
        });

        let info = decode_address_info(payload.to_string().as_bytes()).unwrap();
        prop_assert_eq!(
            info.tokens[0].token_info.as_ref().unwrap().decimals,
            Some(decimals)
        );
    }
}

#[test]
fn reference_vector_from_service_scale() {
    // 1.5 ETH-scale units at 18 decimals priced at 2.0
    let figures = token_figures(Some(1_500_000_000_000_000_000.0), Some(18), Some(2.0));
    assert_eq!(figures.crypto_balance, Some(1.5));
    assert_eq!(figures.fiat_balance, Some(3.0));
}
