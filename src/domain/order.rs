//! Raw on-chain order records and their tag encodings.

use std::fmt;

use super::money::{Price, Quantity};

/// Which binary outcome a quote applies to.
///
/// The on-chain `position` argument encodes YES as `1` and NO as `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Yes,
    No,
}

impl Side {
    /// Both sides, in the order the loop processes them.
    pub const ALL: [Side; 2] = [Side::Yes, Side::No];

    /// The `uint8` encoding expected by the market program.
    pub const fn position_arg(self) -> u8 {
        match self {
            Side::Yes => 1,
            Side::No => 0,
        }
    }

    /// Decode an on-chain position flag.
    pub const fn from_position_flag(flag: u64) -> Option<Self> {
        match flag {
            1 => Some(Side::Yes),
            0 => Some(Side::No),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Yes => write!(f, "YES"),
            Side::No => write!(f, "NO"),
        }
    }
}

/// Order direction. On-chain `side` flag: buy is `1`, sell is `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Buy,
    Sell,
}

impl Direction {
    /// Decode an on-chain side flag.
    pub const fn from_side_flag(flag: u64) -> Option<Self> {
        match flag {
            1 => Some(Direction::Buy),
            0 => Some(Direction::Sell),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Buy => write!(f, "buy"),
            Direction::Sell => write!(f, "sell"),
        }
    }
}

/// Decoded global state of one escrow application.
///
/// This is the shape the order-records port hands back; the aggregator
/// consumes it without further chain knowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOrder {
    pub direction: Direction,
    pub position: Side,
    pub quantity: Quantity,
    pub quantity_filled: Quantity,
    pub price: Price,
    pub slippage: u64,
}

impl RawOrder {
    /// Unfilled remainder of the order.
    pub fn remaining(&self) -> Quantity {
        self.quantity.saturating_sub(self.quantity_filled)
    }

    /// Whether this record belongs in the simple price-level book view:
    /// zero slippage tolerance and strictly positive remaining quantity.
    pub fn is_restable(&self) -> bool {
        self.slippage == 0 && self.quantity > self.quantity_filled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_arg_encoding() {
        assert_eq!(Side::Yes.position_arg(), 1);
        assert_eq!(Side::No.position_arg(), 0);
        assert_eq!(Side::from_position_flag(1), Some(Side::Yes));
        assert_eq!(Side::from_position_flag(0), Some(Side::No));
        assert_eq!(Side::from_position_flag(7), None);
    }

    #[test]
    fn direction_flag_encoding() {
        assert_eq!(Direction::from_side_flag(1), Some(Direction::Buy));
        assert_eq!(Direction::from_side_flag(0), Some(Direction::Sell));
        assert_eq!(Direction::from_side_flag(2), None);
    }

    #[test]
    fn remaining_saturates() {
        let order = RawOrder {
            direction: Direction::Buy,
            position: Side::Yes,
            quantity: 10,
            quantity_filled: 25,
            price: 500_000,
            slippage: 0,
        };
        assert_eq!(order.remaining(), 0);
        assert!(!order.is_restable());
    }
}
