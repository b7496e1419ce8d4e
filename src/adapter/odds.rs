//! The Odds API client.
//!
//! Fetches head-to-head odds from the-odds-api.com v4 and converts bookmaker
//! odds to implied probabilities. Odds of the first listed bookmaker's h2h
//! market are used; line shopping is out of scope.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::FeedError;
use crate::port::{MatchupOdds, OddsFeed};

const DEFAULT_BASE_URL: &str = "https://api.the-odds-api.com/v4/sports";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// REST client for the reference odds feed.
pub struct TheOddsApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    region: &'static str,
    markets: &'static str,
}

impl TheOddsApiClient {
    /// Create a client against the production API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL (tests, proxies).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("default reqwest client");

        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
            region: "us",
            markets: "h2h",
        }
    }
}

#[async_trait]
impl OddsFeed for TheOddsApiClient {
    async fn matchup_odds(&self, sport: &str, event_id: &str) -> Result<MatchupOdds, FeedError> {
        let url = format!("{}/{}/odds/", self.base_url, sport);
        debug!(%url, event_id, "fetching odds");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("regions", self.region),
                ("markets", self.markets),
                ("apiKey", self.api_key.as_str()),
                ("eventIds", event_id),
            ])
            .send()
            .await
            .map_err(FeedError::Request)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let events: Vec<EventDto> = response
            .json()
            .await
            .map_err(FeedError::Request)?;

        let event = events
            .into_iter()
            .find(|event| event.id == event_id)
            .ok_or_else(|| FeedError::EventNotFound {
                event_id: event_id.to_string(),
            })?;

        Ok(event.into_matchup())
    }
}

#[derive(Debug, Deserialize)]
struct EventDto {
    id: String,
    home_team: String,
    away_team: String,
    #[serde(default)]
    bookmakers: Vec<BookmakerDto>,
}

#[derive(Debug, Deserialize)]
struct BookmakerDto {
    #[serde(default)]
    markets: Vec<MarketDto>,
}

#[derive(Debug, Deserialize)]
struct MarketDto {
    #[serde(default)]
    outcomes: Vec<OutcomeDto>,
}

#[derive(Debug, Deserialize)]
struct OutcomeDto {
    name: String,
    price: f64,
}

impl EventDto {
    fn into_matchup(self) -> MatchupOdds {
        let prices: HashMap<String, f64> = self
            .bookmakers
            .first()
            .and_then(|bookmaker| bookmaker.markets.first())
            .map(|market| {
                market
                    .outcomes
                    .iter()
                    .map(|outcome| (outcome.name.clone(), outcome.price))
                    .collect()
            })
            .unwrap_or_default();

        MatchupOdds {
            home_team: self.home_team,
            away_team: self.away_team,
            prices,
        }
    }
}

/// Convert decimal odds to an implied win probability.
///
/// Decimal odds are the total return per unit staked, so the implied
/// probability is their inverse, reported as a percentage rounded to two
/// decimal places (the feed's display precision).
///
/// # Errors
///
/// Returns [`FeedError::InvalidOdds`] for odds at or below 1.
pub fn implied_probability(decimal_odds: f64) -> Result<f64, FeedError> {
    if decimal_odds <= 1.0 {
        return Err(FeedError::InvalidOdds { odds: decimal_odds });
    }
    Ok(((1.0 / decimal_odds) * 10_000.0).round() / 100.0)
}

/// Convert American (moneyline) odds to an implied win probability in
/// percent, rounded to two decimal places.
pub fn american_implied_probability(american_odds: i64) -> f64 {
    let probability = if american_odds > 0 {
        100.0 / (american_odds as f64 + 100.0)
    } else {
        let risked = -american_odds as f64;
        risked / (risked + 100.0)
    };
    (probability * 10_000.0).round() / 100.0
}
