//! Escrow order lifecycle management.
//!
//! Order creation and cancellation are each one atomic group; the group
//! layouts below are the venue's contract and their step order is
//! load-bearing (the application call's resource budget depends on the
//! funding transfers preceding it in the same group).

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{
    execution_fee, round_to_two_significant, Direction, DomainError, EscrowId, Market, Price,
    Quantity, RestingQuote, Side, MICRO_UNIT,
};
use crate::error::{ChainError, Result};
use crate::port::{ArgValue, TransactionGateway, TxnStep};

/// Fixed native-currency amount funding a new escrow's execution cost.
pub const ESCROW_FUNDING_MICRO_ALGOS: u64 = 967_600;

/// Extra fee budget covering the inner escrow deletion.
pub const REGISTER_DELETE_EXTRA_FEE: u64 = 5_000;

const CREATE_ESCROW_METHOD: &str = "create_escrow";
const DELETE_METHOD: &str = "delete";
const REGISTER_DELETE_METHOD: &str = "register_escrow_delete";

/// Owns the side-to-escrow mapping and builds the on-chain order groups.
///
/// One resting-quote slot per side, mutated only here: set on a confirmed
/// create, cleared on a confirmed cancel. Nothing else in the process may
/// touch these slots.
pub struct EscrowOrderManager {
    gateway: Arc<dyn TransactionGateway>,
    market: Market,
    yes_slot: Option<RestingQuote>,
    no_slot: Option<RestingQuote>,
}

impl EscrowOrderManager {
    pub fn new(market: Market, gateway: Arc<dyn TransactionGateway>) -> Self {
        Self {
            gateway,
            market,
            yes_slot: None,
            no_slot: None,
        }
    }

    #[must_use]
    pub const fn market(&self) -> &Market {
        &self.market
    }

    /// The current resting order on one side, if any.
    #[must_use]
    pub const fn resting(&self, side: Side) -> Option<&RestingQuote> {
        match side {
            Side::Yes => self.yes_slot.as_ref(),
            Side::No => self.no_slot.as_ref(),
        }
    }

    fn slot_mut(&mut self, side: Side) -> &mut Option<RestingQuote> {
        match side {
            Side::Yes => &mut self.yes_slot,
            Side::No => &mut self.no_slot,
        }
    }

    /// Place a new escrow order.
    ///
    /// Submits the three-step creation group (native funding, asset funding,
    /// `create_escrow` call) and records the returned escrow id in the
    /// side's slot. The submitted limit price is quantized to the venue's
    /// two-significant-digit display precision; the slot keeps the
    /// unquantized target so hysteresis compares like against like.
    ///
    /// # Errors
    ///
    /// [`ChainError::Submission`] / [`ChainError::ConfirmationTimeout`] from
    /// the gateway leave the slot unchanged. [`DomainError`] for a price
    /// outside the probability domain.
    pub async fn create(
        &mut self,
        side: Side,
        direction: Direction,
        quantity: Quantity,
        price: Price,
    ) -> Result<EscrowId> {
        let submitted_price = round_to_two_significant(price);
        let fee = execution_fee(quantity, submitted_price, self.market.fee_base_micros())?;
        let notional = (quantity as u128 * submitted_price as u128 / MICRO_UNIT as u128) as u64;
        let funding_amount = notional + fee;

        // Buys are funded in the stable asset, sells in the outcome token
        // being offered.
        let funding_asset = match direction {
            Direction::Buy => self.market.funding_asset(),
            Direction::Sell => self.market.outcome_asset(side),
        };

        info!(
            %side,
            %direction,
            price = submitted_price,
            quantity,
            fee,
            "placing escrow order"
        );

        let steps = vec![
            TxnStep::Payment {
                receiver_app: self.market.app_id(),
                amount_micro_algos: ESCROW_FUNDING_MICRO_ALGOS,
                note: "Escrow ALGO Funding",
            },
            TxnStep::AssetTransfer {
                receiver_app: self.market.app_id(),
                asset: funding_asset,
                amount: funding_amount,
                note: "Escrow Asset Funding",
            },
            TxnStep::AppCall {
                app: self.market.app_id(),
                method: CREATE_ESCROW_METHOD,
                args: vec![
                    ArgValue::U64(submitted_price),
                    ArgValue::U64(quantity),
                    ArgValue::U64(0),
                    ArgValue::U8(side.position_arg()),
                ],
                foreign_assets: self.market.referenced_assets().to_vec(),
                foreign_apps: Vec::new(),
                extra_fee_micro_algos: 0,
            },
        ];

        let receipt = self.gateway.submit_group(steps).await?;
        let escrow = receipt
            .return_value
            .map(EscrowId::new)
            .ok_or_else(|| ChainError::Submission("create_escrow returned no escrow id".into()))?;

        info!(
            %side,
            %escrow,
            confirmed_round = receipt.confirmed_round,
            "escrow order confirmed"
        );

        *self.slot_mut(side) = Some(RestingQuote { escrow, price });
        Ok(escrow)
    }

    /// Cancel the resting order on one side.
    ///
    /// Submits the two-call cancellation group (escrow deletion plus the
    /// market's bookkeeping call). The slot is cleared only once the group
    /// confirms; a rejected group leaves the escrow resting and the slot
    /// intact.
    ///
    /// # Errors
    ///
    /// [`DomainError::NoRestingOrder`] when the side has no resting order.
    pub async fn cancel(&mut self, side: Side) -> Result<()> {
        let quote = self
            .resting(side)
            .copied()
            .ok_or(DomainError::NoRestingOrder { side })?;

        info!(%side, escrow = %quote.escrow, "cancelling escrow order");

        let steps = vec![
            TxnStep::AppCall {
                app: quote.escrow.into(),
                method: DELETE_METHOD,
                args: Vec::new(),
                foreign_assets: Vec::new(),
                foreign_apps: Vec::new(),
                extra_fee_micro_algos: 0,
            },
            TxnStep::AppCall {
                app: self.market.app_id(),
                method: REGISTER_DELETE_METHOD,
                args: vec![ArgValue::Address(self.gateway.sender())],
                foreign_assets: self.market.referenced_assets().to_vec(),
                foreign_apps: vec![quote.escrow.into()],
                extra_fee_micro_algos: REGISTER_DELETE_EXTRA_FEE,
            },
        ];

        let receipt = self.gateway.submit_group(steps).await?;
        info!(
            %side,
            escrow = %quote.escrow,
            confirmed_round = receipt.confirmed_round,
            "escrow order cancelled"
        );

        *self.slot_mut(side) = None;
        Ok(())
    }

    /// Cancel the resting order and place a fresh one.
    ///
    /// Deliberately two separately confirmed groups, cancel first: the side
    /// can never hold two live escrows, at the cost of a brief window with
    /// no resting liquidity. If the create fails after a confirmed cancel
    /// the slot stays absent - never a stale handle.
    pub async fn replace(
        &mut self,
        side: Side,
        direction: Direction,
        quantity: Quantity,
        price: Price,
    ) -> Result<EscrowId> {
        self.cancel(side).await?;

        match self.create(side, direction, quantity, price).await {
            Ok(escrow) => Ok(escrow),
            Err(err) => {
                warn!(
                    %side,
                    error = %err,
                    "replacement create failed after cancel; side left unquoted"
                );
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppId, AssetId};

    #[test]
    fn funding_constants_match_protocol() {
        assert_eq!(ESCROW_FUNDING_MICRO_ALGOS, 967_600);
        assert_eq!(REGISTER_DELETE_EXTRA_FEE, 5_000);
    }

    #[test]
    fn notional_uses_floor_division() {
        // 1.5 tokens at 0.333333 rounds the notional down before the fee.
        let quantity: u64 = 1_500_000;
        let price: u64 = 333_333;
        let notional = (quantity as u128 * price as u128 / MICRO_UNIT as u128) as u64;
        assert_eq!(notional, 499_999);
    }

    #[test]
    fn market_assets_feed_group_references() {
        let market = Market::try_new(
            AppId::new(77),
            AssetId::new(101),
            AssetId::new(102),
            "demo",
        )
        .unwrap();
        assert_eq!(market.referenced_assets().len(), 3);
    }
}
