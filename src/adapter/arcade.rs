//! Alpha Arcade market-metadata client.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::{AppId, AssetId, Market};
use crate::error::FeedError;
use crate::port::MarketCatalog;

const DEFAULT_BASE_URL: &str = "https://g08245wvl7.execute-api.us-east-1.amazonaws.com/api";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// REST client for the venue's market catalog.
pub struct ArcadeClient {
    http: reqwest::Client,
    base_url: String,
}

impl ArcadeClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("default reqwest client");

        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

impl Default for ArcadeClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketCatalog for ArcadeClient {
    async fn market_info(&self, market_id: &str) -> Result<Market, FeedError> {
        let url = format!("{}/get-market", self.base_url);
        debug!(%url, market_id, "fetching market metadata");

        let response = self
            .http
            .get(&url)
            .query(&[("marketId", market_id)])
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

        let envelope: MarketEnvelope = response
            .json()
            .await
            .map_err(FeedError::Request)?;

        let market = envelope.market.into_domain()?;
        info!(
            market = market.slug(),
            app_id = %market.app_id(),
            yes_asset = %market.yes_asset(),
            no_asset = %market.no_asset(),
            "fetched market metadata"
        );
        Ok(market)
    }
}

#[derive(Debug, Deserialize)]
struct MarketEnvelope {
    market: MarketDto,
}

/// Wire shape of the catalog's market record. The payload carries many more
/// fields (colors, rules, volume); only the trading-relevant ones are read.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MarketDto {
    market_app_id: Option<u64>,
    yes_asset_id: Option<u64>,
    no_asset_id: Option<u64>,
    #[serde(default)]
    slug: Option<String>,
}

impl MarketDto {
    fn into_domain(self) -> Result<Market, FeedError> {
        let market_app_id = self.market_app_id.ok_or_else(|| missing("marketAppId"))?;
        let yes_asset_id = self.yes_asset_id.ok_or_else(|| missing("yesAssetId"))?;
        let no_asset_id = self.no_asset_id.ok_or_else(|| missing("noAssetId"))?;

        Market::try_new(
            AppId::new(market_app_id),
            AssetId::new(yes_asset_id),
            AssetId::new(no_asset_id),
            self.slug.unwrap_or_default(),
        )
        .map_err(|err| FeedError::MalformedPayload {
            reason: err.to_string(),
        })
    }
}

fn missing(field: &str) -> FeedError {
    FeedError::MalformedPayload {
        reason: format!("missing field {field}"),
    }
}
