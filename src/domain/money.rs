//! Fixed-point monetary types at micro-unit scale.
//!
//! Prices are probabilities expressed in millionths (`0..=1_000_000`);
//! quantities are outcome-token counts at the same scale. Floats appear only
//! transiently when converting feed odds and must be folded into fixed point
//! before anything touches the settlement path.

/// Micro-units per whole unit (1 USDC = 1_000_000 microUSDC).
pub const MICRO_UNIT: u64 = 1_000_000;

/// Probability price in millionths. Valid domain is `0..=MICRO_UNIT`.
pub type Price = u64;

/// Outcome-token quantity in micro-units.
pub type Quantity = u64;

/// Convert a human-readable amount to micro-units.
pub fn to_micros(amount: f64) -> u64 {
    (amount * MICRO_UNIT as f64) as u64
}

/// Convert micro-units to a human-readable amount. Display only.
pub fn from_micros(amount: u64) -> f64 {
    amount as f64 / MICRO_UNIT as f64
}

/// Convert an implied-probability percentage (e.g. `45.00`) to a [`Price`].
///
/// The odds feed reports probabilities as percentages with two decimal
/// places, so the result is exact at micro scale.
pub fn percent_to_price(percent: f64) -> Price {
    (percent * 10_000.0).round() as Price
}

/// Convert a [`Price`] back to a percentage for logging.
pub fn price_to_percent(price: Price) -> f64 {
    price as f64 / 10_000.0
}

/// Quantize a value to two significant digits, rounding half away from zero.
///
/// Submitted limit prices are coarsened to the venue's display precision:
/// `356_200` becomes `360_000`, `724` becomes `720`, `0` stays `0`.
pub fn round_to_two_significant(value: u64) -> u64 {
    if value < 100 {
        return value;
    }
    let mut magnitude = 1u64;
    let mut digits = 0u32;
    let mut rest = value;
    while rest >= 10 {
        rest /= 10;
        digits += 1;
    }
    for _ in 0..digits.saturating_sub(1) {
        magnitude *= 10;
    }
    (value + magnitude / 2) / magnitude * magnitude
}
