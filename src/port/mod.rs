//! Trait definitions for every external collaborator.
//!
//! The trading core depends only on these interfaces; `adapter` provides the
//! REST implementations that exist in-repo, and the transaction-layer ports
//! are wired in by the embedding process.

mod chain;

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::Market;
use crate::error::FeedError;

pub use chain::{ArgValue, GroupReceipt, OrderRecords, TransactionGateway, TxnStep, Wallet};

/// Head-to-head odds for one event.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchupOdds {
    pub home_team: String,
    pub away_team: String,
    /// Decimal odds keyed by team name.
    pub prices: HashMap<String, f64>,
}

impl MatchupOdds {
    /// Decimal odds for one team, if the book lists it.
    #[must_use]
    pub fn decimal_odds(&self, team: &str) -> Option<f64> {
        self.prices.get(team).copied()
    }
}

/// Reference odds collaborator.
#[async_trait]
pub trait OddsFeed: Send + Sync {
    async fn matchup_odds(&self, sport: &str, event_id: &str) -> Result<MatchupOdds, FeedError>;
}

/// Market metadata collaborator.
#[async_trait]
pub trait MarketCatalog: Send + Sync {
    async fn market_info(&self, market_id: &str) -> Result<Market, FeedError>;
}
