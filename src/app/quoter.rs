//! The quoting loop.
//!
//! One session per market, strictly sequential: poll the order book and the
//! reference odds, decide per side, act, sleep, repeat. All resting-quote
//! state lives in the session's [`EscrowOrderManager`]; nothing else mutates
//! it, so there is nothing to race.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::domain::{
    decide, percent_to_price, Direction, OrderBook, Price, QuoteDecision, QuotePolicy, Side,
};
use crate::error::{ChainError, Error, FeedError, Result};
use crate::port::{MatchupOdds, OddsFeed, OrderRecords, Wallet};

use super::escrow::EscrowOrderManager;
use super::Ports;
use crate::adapter::implied_probability;

/// A running quoting session for one market.
pub struct QuoterSession {
    odds: Arc<dyn OddsFeed>,
    records: Arc<dyn OrderRecords>,
    manager: EscrowOrderManager,
    sport: String,
    odds_event_id: String,
    yes_policy: QuotePolicy,
    no_policy: QuotePolicy,
    poll_interval: Duration,
    dry_run: bool,
}

impl QuoterSession {
    /// Initialize a session: fetch and validate the market metadata, then
    /// make sure the account holds both outcome tokens' opt-ins.
    ///
    /// # Errors
    ///
    /// Any failure here is fatal; the session never starts half-configured.
    pub async fn initialize(config: &Config, ports: Ports) -> Result<Self> {
        let market = ports.catalog.market_info(&config.market.market_id).await?;

        ensure_opt_ins(ports.wallet.as_ref(), &market).await?;

        let manager = EscrowOrderManager::new(market, ports.gateway);

        Ok(Self {
            odds: ports.odds,
            records: ports.records,
            manager,
            sport: config.market.sport.clone(),
            odds_event_id: config.market.odds_event_id.clone(),
            yes_policy: config.policy(Side::Yes),
            no_policy: config.policy(Side::No),
            poll_interval: config.poll_interval(),
            dry_run: config.quoting.dry_run,
        })
    }

    /// Run the polling loop until the surrounding task is cancelled.
    pub async fn run(&mut self) -> Result<()> {
        info!(
            market = self.manager.market().slug(),
            interval_secs = self.poll_interval.as_secs(),
            dry_run = self.dry_run,
            "quoting session started"
        );

        loop {
            if let Err(err) = self.cycle().await {
                warn!(error = %err, "cycle skipped");
            }

            debug!(secs = self.poll_interval.as_secs(), "sleeping");
            sleep(self.poll_interval).await;
        }
    }

    /// One poll, decide, act pass.
    ///
    /// A feed failure skips the whole cycle; an action failure on one side
    /// is logged and does not block the other side.
    pub async fn cycle(&mut self) -> Result<()> {
        let market_app = self.manager.market().app_id();

        let records = self.records.open_orders(market_app).await?;
        let book = OrderBook::aggregate(&records);
        info!(
            yes_bid = ?book.best_bid_units(Side::Yes),
            no_bid = ?book.best_bid_units(Side::No),
            open_orders = records.len(),
            "order book polled"
        );

        let odds = self
            .odds
            .matchup_odds(&self.sport, &self.odds_event_id)
            .await?;

        for side in Side::ALL {
            let reference = reference_price(&odds, side)?;
            let policy = self.policy(side);
            let decision = decide(reference, self.manager.resting(side), &policy)?;

            if let Err(err) = self.act(side, decision).await {
                match err {
                    Error::Chain(ChainError::ConfirmationTimeout(ref reason)) => {
                        // On-chain state is ambiguous; reconcile before the
                        // next action on this side.
                        error!(%side, reason = %reason, "confirmation timed out, state ambiguous");
                    }
                    err => warn!(%side, error = %err, "quote action failed"),
                }
            }
        }

        Ok(())
    }

    const fn policy(&self, side: Side) -> QuotePolicy {
        match side {
            Side::Yes => self.yes_policy,
            Side::No => self.no_policy,
        }
    }

    async fn act(&mut self, side: Side, decision: QuoteDecision) -> Result<()> {
        match decision {
            QuoteDecision::Hold => {
                debug!(%side, "holding resting quote");
            }
            QuoteDecision::Create { price, quantity } => {
                if self.dry_run {
                    info!(%side, price, quantity, "dry run: would create order");
                    return Ok(());
                }
                self.manager
                    .create(side, Direction::Buy, quantity, price)
                    .await?;
            }
            QuoteDecision::Replace {
                escrow,
                price,
                quantity,
            } => {
                if self.dry_run {
                    info!(%side, %escrow, price, quantity, "dry run: would replace order");
                    return Ok(());
                }
                self.manager
                    .replace(side, Direction::Buy, quantity, price)
                    .await?;
            }
        }
        Ok(())
    }

    /// The escrow manager, exposed for state inspection in tests and
    /// embedding processes.
    #[must_use]
    pub const fn manager(&self) -> &EscrowOrderManager {
        &self.manager
    }
}

/// Map one side to its team and convert that team's decimal odds to a
/// fixed-point reference probability. YES quotes the home team, NO the away
/// team.
fn reference_price(odds: &MatchupOdds, side: Side) -> Result<Price> {
    let team = match side {
        Side::Yes => &odds.home_team,
        Side::No => &odds.away_team,
    };

    let decimal = odds
        .decimal_odds(team)
        .ok_or_else(|| FeedError::MissingTeamOdds { team: team.clone() })?;

    let percent = implied_probability(decimal)?;
    let price = percent_to_price(percent);
    debug!(%side, team = %team, decimal, percent, price, "implied probability");
    Ok(price)
}

async fn ensure_opt_ins(wallet: &dyn Wallet, market: &crate::domain::Market) -> Result<()> {
    for asset in [market.yes_asset(), market.no_asset()] {
        if wallet.is_opted_in(asset).await? {
            debug!(%asset, "already opted in");
            continue;
        }
        info!(%asset, "opting in to outcome asset");
        wallet.opt_in(asset).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn odds(home: f64, away: f64) -> MatchupOdds {
        MatchupOdds {
            home_team: "Home".into(),
            away_team: "Away".into(),
            prices: HashMap::from([("Home".into(), home), ("Away".into(), away)]),
        }
    }

    #[test]
    fn yes_side_references_home_team() {
        let reference = reference_price(&odds(2.0, 1.8), Side::Yes).unwrap();
        assert_eq!(reference, 500_000);
    }

    #[test]
    fn no_side_references_away_team() {
        let reference = reference_price(&odds(2.0, 4.0), Side::No).unwrap();
        assert_eq!(reference, 250_000);
    }

    #[test]
    fn missing_team_odds_surface_as_feed_error() {
        let mut matchup = odds(2.0, 1.8);
        matchup.prices.remove("Away");

        let err = reference_price(&matchup, Side::No).unwrap_err();
        assert!(matches!(
            err,
            Error::Feed(FeedError::MissingTeamOdds { .. })
        ));
    }
}
