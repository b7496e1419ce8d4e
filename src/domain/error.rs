//! Domain invariant violations.

use thiserror::Error;

use super::money::{Price, Quantity};
use super::order::Side;

/// Errors raised when a domain contract is violated.
///
/// These are programmer or policy errors, never network conditions, and are
/// surfaced rather than clamped so misconfiguration fails loudly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("price {price} outside probability domain 0..=1000000")]
    PriceOutOfRange { price: Price },

    #[error("fee computation overflowed for quantity {quantity} at price {price}")]
    FeeOverflow { quantity: Quantity, price: Price },

    #[error("quote target out of range: reference {reference} - offset {offset}")]
    TargetOutOfRange { reference: Price, offset: Price },

    #[error("invalid market metadata: {reason}")]
    InvalidMarket { reason: String },

    #[error("no resting order on the {side} side")]
    NoRestingOrder { side: Side },
}
