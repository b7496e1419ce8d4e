//! Protocol execution fee.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::error::DomainError;
use super::money::{Price, Quantity, MICRO_UNIT};

/// Compute the protocol fee owed for a prospective trade, in micro-units.
///
/// The fee is quadratic in probability: `ceil(fee_base * quantity * p * (1 - p))`
/// with `p = price / 1_000_000` and `fee_base` likewise in millionths. The
/// whole computation runs in [`Decimal`] so no rounding drift leaks in before
/// the final ceil; it is maximized at `p = 0.5` and monotonic in quantity.
///
/// # Errors
///
/// Returns [`DomainError::PriceOutOfRange`] when `price` exceeds the
/// probability domain. Out-of-domain prices are a caller bug and are never
/// clamped.
pub fn execution_fee(
    quantity: Quantity,
    price: Price,
    fee_base_micros: u64,
) -> Result<u64, DomainError> {
    if price > MICRO_UNIT {
        return Err(DomainError::PriceOutOfRange { price });
    }

    let scale = Decimal::from(MICRO_UNIT);
    let q = Decimal::from(quantity);
    let p = Decimal::from(price) / scale;
    let fb = Decimal::from(fee_base_micros) / scale;

    let fee = fb * q * p * (Decimal::ONE - p);
    fee.ceil()
        .to_u64()
        .ok_or(DomainError::FeeOverflow { quantity, price })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEE_BASE: u64 = 70_000;

    #[test]
    fn worked_example_matches_protocol() {
        // ceil(0.07 * 1 * 0.45 * 0.55 * 1_000_000)
        assert_eq!(execution_fee(1_000_000, 450_000, FEE_BASE), Ok(17_325));
    }

    #[test]
    fn fee_is_zero_at_domain_edges() {
        assert_eq!(execution_fee(1_000_000, 0, FEE_BASE), Ok(0));
        assert_eq!(execution_fee(1_000_000, MICRO_UNIT, FEE_BASE), Ok(0));
    }

    #[test]
    fn fee_maximized_at_even_odds() {
        let at_half = execution_fee(5_000_000, 500_000, FEE_BASE).unwrap();
        for price in [1, 100_000, 250_000, 499_999, 500_001, 750_000, 999_999] {
            let fee = execution_fee(5_000_000, price, FEE_BASE).unwrap();
            assert!(
                fee <= at_half,
                "fee at price {price} ({fee}) exceeds fee at even odds ({at_half})"
            );
        }
    }

    #[test]
    fn fee_monotonic_in_quantity() {
        let mut last = 0;
        for quantity in [0, 1_000_000, 2_000_000, 10_000_000, 100_000_000] {
            let fee = execution_fee(quantity, 300_000, FEE_BASE).unwrap();
            assert!(fee >= last);
            last = fee;
        }
    }

    #[test]
    fn decimal_path_has_no_float_drift() {
        use rust_decimal_macros::dec;

        // The same product computed directly in decimal is exact; the fee
        // path must agree with it, not with a float approximation.
        let expected = dec!(0.07) * dec!(0.45) * dec!(0.55) * dec!(1000000);
        assert_eq!(expected, dec!(17325));
        assert_eq!(execution_fee(1_000_000, 450_000, FEE_BASE), Ok(17_325));
    }

    #[test]
    fn fractional_fee_rounds_up() {
        // 0.07 * 1 * 0.000001 * 0.999999 * 1e6 = 0.069999...
        assert_eq!(execution_fee(1_000_000, 1, FEE_BASE), Ok(1));
    }

    #[test]
    fn out_of_domain_price_is_rejected() {
        assert_eq!(
            execution_fee(1_000_000, MICRO_UNIT + 1, FEE_BASE),
            Err(DomainError::PriceOutOfRange {
                price: MICRO_UNIT + 1
            })
        );
    }
}
