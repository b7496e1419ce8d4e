//! Price-level order book reconstruction.
//!
//! The aggregator is a pure grouping function over raw escrow records: it
//! buckets by direction and side, sums remaining quantity per distinct price,
//! and deliberately imposes no ordering. Callers that need the touch lines
//! use [`SideBook::best_bid`] / [`SideBook::best_ask`].

use std::collections::HashMap;

use super::money::{from_micros, Price, Quantity, MICRO_UNIT};
use super::order::{Direction, RawOrder, Side};

/// One aggregated price level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderbookEntry {
    price: Price,
    quantity: Quantity,
    total: u128,
}

impl OrderbookEntry {
    #[must_use]
    pub const fn new(price: Price, quantity: Quantity) -> Self {
        Self {
            price,
            quantity,
            total: price as u128 * quantity as u128,
        }
    }

    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Notional at micro² scale (`price × quantity`).
    #[must_use]
    pub const fn total(&self) -> u128 {
        self.total
    }

    /// Notional in whole funding-asset units, for display.
    #[must_use]
    pub fn total_units(&self) -> f64 {
        self.total as f64 / (MICRO_UNIT as f64 * MICRO_UNIT as f64)
    }
}

/// Bids and asks for one outcome side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideBook {
    bids: Vec<OrderbookEntry>,
    asks: Vec<OrderbookEntry>,
}

impl SideBook {
    #[must_use]
    pub fn bids(&self) -> &[OrderbookEntry] {
        &self.bids
    }

    #[must_use]
    pub fn asks(&self) -> &[OrderbookEntry] {
        &self.asks
    }

    /// Highest-priced bid level, if any.
    #[must_use]
    pub fn best_bid(&self) -> Option<&OrderbookEntry> {
        self.bids.iter().max_by_key(|entry| entry.price())
    }

    /// Lowest-priced ask level, if any.
    #[must_use]
    pub fn best_ask(&self) -> Option<&OrderbookEntry> {
        self.asks.iter().min_by_key(|entry| entry.price())
    }
}

/// Aggregated book for both outcome sides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBook {
    yes: SideBook,
    no: SideBook,
}

impl OrderBook {
    /// Reconstruct the book from raw escrow records.
    ///
    /// Records with nonzero slippage tolerance or no remaining quantity are a
    /// different order class and are excluded. For a fixed input multiset the
    /// output entries are identical up to iteration order.
    #[must_use]
    pub fn aggregate(records: &[RawOrder]) -> Self {
        Self {
            yes: SideBook {
                bids: aggregate_levels(records, Direction::Buy, Side::Yes),
                asks: aggregate_levels(records, Direction::Sell, Side::Yes),
            },
            no: SideBook {
                bids: aggregate_levels(records, Direction::Buy, Side::No),
                asks: aggregate_levels(records, Direction::Sell, Side::No),
            },
        }
    }

    #[must_use]
    pub const fn side(&self, side: Side) -> &SideBook {
        match side {
            Side::Yes => &self.yes,
            Side::No => &self.no,
        }
    }

    /// Best bid on a side as a human-readable probability, for logging.
    #[must_use]
    pub fn best_bid_units(&self, side: Side) -> Option<f64> {
        self.side(side).best_bid().map(|entry| from_micros(entry.price()))
    }
}

fn aggregate_levels(
    records: &[RawOrder],
    direction: Direction,
    side: Side,
) -> Vec<OrderbookEntry> {
    let mut levels: HashMap<Price, Quantity> = HashMap::new();

    for record in records {
        if record.direction != direction || record.position != side {
            continue;
        }
        if !record.is_restable() || record.price == 0 {
            continue;
        }
        *levels.entry(record.price).or_default() += record.remaining();
    }

    levels
        .into_iter()
        .map(|(price, quantity)| OrderbookEntry::new(price, quantity))
        .collect()
}
