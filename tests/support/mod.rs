//! Scripted collaborator implementations for integration tests.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use oddsmith::config::Config;
use oddsmith::domain::{Address, AppId, AssetId, Market, RawOrder};
use oddsmith::error::{ChainError, FeedError};
use oddsmith::port::{
    GroupReceipt, MarketCatalog, MatchupOdds, OddsFeed, OrderRecords, TransactionGateway, TxnStep,
    Wallet,
};

pub const HOME: &str = "Boston Red Sox";
pub const AWAY: &str = "New York Yankees";
pub const SENDER: &str = "QUOTER7SENDER";

/// Odds feed whose current matchup can be rescripted between cycles.
pub struct ScriptedOdds {
    current: Mutex<Option<MatchupOdds>>,
}

impl ScriptedOdds {
    pub fn new(home_odds: f64, away_odds: f64) -> Self {
        let feed = Self {
            current: Mutex::new(None),
        };
        feed.set(home_odds, away_odds);
        feed
    }

    /// Replace the scripted odds for both teams.
    pub fn set(&self, home_odds: f64, away_odds: f64) {
        let matchup = MatchupOdds {
            home_team: HOME.into(),
            away_team: AWAY.into(),
            prices: HashMap::from([(HOME.into(), home_odds), (AWAY.into(), away_odds)]),
        };
        *self.current.lock().unwrap() = Some(matchup);
    }

    /// Make the next fetches fail as if the event disappeared.
    pub fn go_dark(&self) {
        *self.current.lock().unwrap() = None;
    }
}

#[async_trait]
impl OddsFeed for ScriptedOdds {
    async fn matchup_odds(&self, _sport: &str, event_id: &str) -> Result<MatchupOdds, FeedError> {
        self.current
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| FeedError::EventNotFound {
                event_id: event_id.to_string(),
            })
    }
}

/// Catalog returning one fixed market.
pub struct StaticCatalog {
    market: Market,
}

impl StaticCatalog {
    pub fn new(market: Market) -> Self {
        Self { market }
    }
}

#[async_trait]
impl MarketCatalog for StaticCatalog {
    async fn market_info(&self, _market_id: &str) -> Result<Market, FeedError> {
        Ok(self.market.clone())
    }
}

/// Order records port returning a fixed snapshot.
#[derive(Default)]
pub struct StaticRecords {
    records: Vec<RawOrder>,
}

#[async_trait]
impl OrderRecords for StaticRecords {
    async fn open_orders(&self, _market_app_id: AppId) -> Result<Vec<RawOrder>, FeedError> {
        Ok(self.records.clone())
    }
}

/// Wallet tracking which opt-ins were performed.
pub struct TrackingWallet {
    opted: Mutex<HashSet<u64>>,
    opt_in_calls: Mutex<Vec<u64>>,
}

impl TrackingWallet {
    pub fn new(opted: impl IntoIterator<Item = u64>) -> Self {
        Self {
            opted: Mutex::new(opted.into_iter().collect()),
            opt_in_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn opt_in_calls(&self) -> Vec<u64> {
        self.opt_in_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Wallet for TrackingWallet {
    async fn is_opted_in(&self, asset: AssetId) -> Result<bool, ChainError> {
        Ok(self.opted.lock().unwrap().contains(&asset.value()))
    }

    async fn opt_in(&self, asset: AssetId) -> Result<(), ChainError> {
        self.opt_in_calls.lock().unwrap().push(asset.value());
        self.opted.lock().unwrap().insert(asset.value());
        Ok(())
    }
}

/// Gateway recording every submitted group.
///
/// Responses can be scripted per call; when the queue is empty each group
/// confirms with a fresh escrow id.
pub struct RecordingGateway {
    groups: Mutex<Vec<Vec<TxnStep>>>,
    responses: Mutex<VecDeque<Result<GroupReceipt, ChainError>>>,
    next_escrow: Mutex<u64>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self {
            groups: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
            next_escrow: Mutex::new(5_000),
        }
    }

    pub fn push_response(&self, response: Result<GroupReceipt, ChainError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn confirmed(tx_count: usize, return_value: Option<u64>) -> GroupReceipt {
        GroupReceipt {
            tx_ids: (0..tx_count).map(|i| format!("tx-{i}")).collect(),
            confirmed_round: 41_000_000,
            return_value,
        }
    }

    pub fn submitted(&self) -> Vec<Vec<TxnStep>> {
        self.groups.lock().unwrap().clone()
    }
}

impl Default for RecordingGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransactionGateway for RecordingGateway {
    async fn submit_group(&self, steps: Vec<TxnStep>) -> Result<GroupReceipt, ChainError> {
        let scripted = self.responses.lock().unwrap().pop_front();
        let tx_count = steps.len();
        self.groups.lock().unwrap().push(steps);

        match scripted {
            Some(response) => response,
            None => {
                let mut next = self.next_escrow.lock().unwrap();
                *next += 1;
                Ok(Self::confirmed(tx_count, Some(*next)))
            }
        }
    }

    fn sender(&self) -> Address {
        Address::from(SENDER)
    }
}

/// A market with recognizable ids.
pub fn market() -> Market {
    Market::try_new(
        AppId::new(900),
        AssetId::new(901),
        AssetId::new(902),
        "red-sox-vs-yankees",
    )
    .unwrap()
}

/// Config with the observed defaults and live (non-dry-run) acting.
pub fn config(dry_run: bool) -> Config {
    let raw = format!(
        r#"
        [market]
        market_id = "mkt-test"
        odds_event_id = "evt-test"
        sport = "baseball_mlb"

        [quoting]
        dry_run = {dry_run}
        "#
    );
    let mut config: Config = toml::from_str(&raw).unwrap();
    config.odds.api_key = Some("test-key".into());
    config
}
