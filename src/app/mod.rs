//! Application wiring and orchestration.

mod escrow;
mod quoter;

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::port::{MarketCatalog, OddsFeed, OrderRecords, TransactionGateway, Wallet};

pub use escrow::{EscrowOrderManager, ESCROW_FUNDING_MICRO_ALGOS, REGISTER_DELETE_EXTRA_FEE};
pub use quoter::QuoterSession;

/// The full set of external collaborators a session runs against.
///
/// The REST ports have in-repo adapters; the chain ports are supplied by the
/// embedding process (or [`OfflineChain`](crate::adapter::OfflineChain) for
/// dry runs).
pub struct Ports {
    pub odds: Arc<dyn OddsFeed>,
    pub catalog: Arc<dyn MarketCatalog>,
    pub records: Arc<dyn OrderRecords>,
    pub wallet: Arc<dyn Wallet>,
    pub gateway: Arc<dyn TransactionGateway>,
}

/// Initialize a session from config and run it until cancelled.
pub async fn run(config: Config, ports: Ports) -> Result<()> {
    let mut session = QuoterSession::initialize(&config, ports).await?;
    session.run().await
}
