//! Token balance derivation
//!
//! Turns the service's raw integer-scale balance into human-scale crypto
//! and fiat figures. Absence propagates strictly: an unknown input never
//! becomes a zero output.

/// Derived per-token figures
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TokenFigures {
    /// `raw_balance / 10^decimals`, absent unless both inputs are known
    pub crypto_balance: Option<f64>,
    /// `crypto_balance * rate`, absent unless both inputs are known
    pub fiat_balance: Option<f64>,
}

/// Compute the derived figures for one token record
pub fn token_figures(
    raw_balance: Option<f64>,
    decimals: Option<u32>,
    rate: Option<f64>,
) -> TokenFigures {
    let crypto_balance = match (raw_balance, decimals) {
        (Some(raw), Some(decimals)) => Some(raw / 10f64.powi(decimals as i32)),
        _ => None,
    };

    let fiat_balance = match (crypto_balance, rate) {
        (Some(crypto), Some(rate)) => Some(crypto * rate),
        _ => None,
    };

    TokenFigures {
        crypto_balance,
        fiat_balance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_derivation() {
        let figures = token_figures(Some(1_500_000_000_000_000_000.0), Some(18), Some(2.0));
        assert_eq!(figures.crypto_balance, Some(1.5));
        assert_eq!(figures.fiat_balance, Some(3.0));
    }

    #[test]
    fn test_zero_decimals() {
        let figures = token_figures(Some(250.0), Some(0), Some(4.0));
        assert_eq!(figures.crypto_balance, Some(250.0));
        assert_eq!(figures.fiat_balance, Some(1000.0));
    }

    #[test]
    fn test_missing_raw_balance_leaves_everything_absent() {
        let figures = token_figures(None, Some(18), Some(2.0));
        assert_eq!(figures.crypto_balance, None);
        assert_eq!(figures.fiat_balance, None);
    }

    #[test]
    fn test_missing_decimals_leaves_everything_absent() {
        let figures = token_figures(Some(1e18), None, Some(2.0));
        assert_eq!(figures.crypto_balance, None);
        assert_eq!(figures.fiat_balance, None);
    }

    #[test]
    fn test_missing_rate_leaves_fiat_absent() {
        let figures = token_figures(Some(1e18), Some(18), None);
        assert_eq!(figures.crypto_balance, Some(1.0));
        assert_eq!(figures.fiat_balance, None);
    }

    #[test]
    fn test_zero_raw_balance_is_a_real_zero() {
        // A reported zero is a known balance, not an absence
        let figures = token_figures(Some(0.0), Some(6), Some(1.0));
        assert_eq!(figures.crypto_balance, Some(0.0));
        assert_eq!(figures.fiat_balance, Some(0.0));
    }
}
