//! Requoting decision logic.

use super::error::DomainError;
use super::id::EscrowId;
use super::money::{Price, Quantity, MICRO_UNIT};

/// A currently-live escrow order on one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestingQuote {
    pub escrow: EscrowId,
    pub price: Price,
}

/// Parameters governing one side's quoting behavior.
#[derive(Debug, Clone, Copy)]
pub struct QuotePolicy {
    /// Subtracted from the reference probability to reach the passive target.
    pub spread_offset: Price,
    /// Hysteresis band: the resting order is left alone while the target
    /// stays strictly within this distance of its price.
    pub requote_band: Price,
    /// Order size in micro-units.
    pub quantity: Quantity,
}

/// What the loop should do to one side this cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteDecision {
    /// Resting order stays untouched.
    Hold,
    /// No resting order; place one at `price`.
    Create { price: Price, quantity: Quantity },
    /// Cancel `escrow` and place a fresh order at `price`.
    Replace {
        escrow: EscrowId,
        price: Price,
        quantity: Quantity,
    },
}

/// Derive the quoting decision for one side.
///
/// The band is two-sided: movement past the threshold in either direction
/// triggers a replace. A reference or offset combination whose target would
/// leave the probability domain is a policy error, surfaced rather than
/// clamped.
///
/// # Errors
///
/// Returns [`DomainError::TargetOutOfRange`] when `reference - spread_offset`
/// underflows, and [`DomainError::PriceOutOfRange`] when `reference` itself
/// is outside the probability domain.
pub fn decide(
    reference: Price,
    resting: Option<&RestingQuote>,
    policy: &QuotePolicy,
) -> Result<QuoteDecision, DomainError> {
    if reference > MICRO_UNIT {
        return Err(DomainError::PriceOutOfRange { price: reference });
    }

    let target = reference
        .checked_sub(policy.spread_offset)
        .ok_or(DomainError::TargetOutOfRange {
            reference,
            offset: policy.spread_offset,
        })?;

    let Some(resting) = resting else {
        return Ok(QuoteDecision::Create {
            price: target,
            quantity: policy.quantity,
        });
    };

    if resting.price.abs_diff(target) < policy.requote_band {
        return Ok(QuoteDecision::Hold);
    }

    Ok(QuoteDecision::Replace {
        escrow: resting.escrow,
        price: target,
        quantity: policy.quantity,
    })
}
