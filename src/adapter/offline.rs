//! Read-only chain stand-in for dry runs.
//!
//! The binary has no signing layer; live submission requires embedding the
//! crate with a real [`TransactionGateway`]. For dry runs this adapter
//! satisfies the chain ports: the wallet reports every asset as opted in,
//! the order feed is empty, and any submission attempt is refused.

use async_trait::async_trait;

use crate::domain::{Address, AppId, AssetId, RawOrder};
use crate::error::{ChainError, FeedError};
use crate::port::{GroupReceipt, OrderRecords, TransactionGateway, TxnStep, Wallet};

/// Chain ports implementation with no network behind it.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineChain;

#[async_trait]
impl OrderRecords for OfflineChain {
    async fn open_orders(&self, _market_app_id: AppId) -> Result<Vec<RawOrder>, FeedError> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl Wallet for OfflineChain {
    async fn is_opted_in(&self, _asset: AssetId) -> Result<bool, ChainError> {
        Ok(true)
    }

    async fn opt_in(&self, _asset: AssetId) -> Result<(), ChainError> {
        Ok(())
    }
}

#[async_trait]
impl TransactionGateway for OfflineChain {
    async fn submit_group(&self, _steps: Vec<TxnStep>) -> Result<GroupReceipt, ChainError> {
        Err(ChainError::Submission(
            "offline gateway cannot submit transactions".into(),
        ))
    }

    fn sender(&self) -> Address {
        Address::from("OFFLINE")
    }
}
