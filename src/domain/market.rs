//! Market metadata.

use super::error::DomainError;
use super::id::{AppId, AssetId};
use super::order::Side;

/// The stable funding asset every market settles in (USDC).
pub const FUNDING_ASSET: AssetId = AssetId::new(31_566_704);

/// Protocol fee base in millionths, fixed across markets.
pub const FEE_BASE_MICROS: u64 = 70_000;

/// A binary-outcome market, immutable for the lifetime of a quoting session.
///
/// Construction goes through [`Market::try_new`], which rejects malformed
/// metadata at the fetch boundary instead of letting optional-everywhere
/// values propagate into the trading path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Market {
    market_app_id: AppId,
    yes_asset_id: AssetId,
    no_asset_id: AssetId,
    funding_asset_id: AssetId,
    fee_base_micros: u64,
    slug: String,
}

impl Market {
    /// Validate and build a market from fetched metadata.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidMarket`] when any id is zero or the two
    /// outcome tokens are not distinct.
    pub fn try_new(
        market_app_id: AppId,
        yes_asset_id: AssetId,
        no_asset_id: AssetId,
        slug: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if market_app_id.value() == 0 {
            return Err(DomainError::InvalidMarket {
                reason: "market application id is zero".into(),
            });
        }
        if yes_asset_id.value() == 0 || no_asset_id.value() == 0 {
            return Err(DomainError::InvalidMarket {
                reason: "outcome asset id is zero".into(),
            });
        }
        if yes_asset_id == no_asset_id {
            return Err(DomainError::InvalidMarket {
                reason: "yes and no assets must be distinct".into(),
            });
        }

        Ok(Self {
            market_app_id,
            yes_asset_id,
            no_asset_id,
            funding_asset_id: FUNDING_ASSET,
            fee_base_micros: FEE_BASE_MICROS,
            slug: slug.into(),
        })
    }

    #[must_use]
    pub const fn app_id(&self) -> AppId {
        self.market_app_id
    }

    #[must_use]
    pub const fn yes_asset(&self) -> AssetId {
        self.yes_asset_id
    }

    #[must_use]
    pub const fn no_asset(&self) -> AssetId {
        self.no_asset_id
    }

    #[must_use]
    pub const fn funding_asset(&self) -> AssetId {
        self.funding_asset_id
    }

    #[must_use]
    pub const fn fee_base_micros(&self) -> u64 {
        self.fee_base_micros
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// The outcome token backing one side.
    #[must_use]
    pub const fn outcome_asset(&self, side: Side) -> AssetId {
        match side {
            Side::Yes => self.yes_asset_id,
            Side::No => self.no_asset_id,
        }
    }

    /// All asset ids the market's entry points reference, in declaration
    /// order: funding asset, YES token, NO token.
    #[must_use]
    pub const fn referenced_assets(&self) -> [AssetId; 3] {
        [self.funding_asset_id, self.yes_asset_id, self.no_asset_id]
    }
}
