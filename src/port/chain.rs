//! Transaction-layer ports.
//!
//! The core never signs or serializes transactions. It describes an atomic
//! group as an ordered list of [`TxnStep`]s and hands the whole group to a
//! [`TransactionGateway`], whose implementation owns keys, fee suggestion,
//! submission, and confirmation within the network's window. A group either
//! confirms as a unit or the gateway returns an error.

use async_trait::async_trait;

use crate::domain::{Address, AppId, AssetId, RawOrder};
use crate::error::{ChainError, FeedError};

/// ABI argument value for an application call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    U64(u64),
    U8(u8),
    Address(Address),
}

/// One transaction inside an atomic group.
///
/// `receiver_app` on the transfer steps names the application whose custody
/// address receives the funds; deriving the actual address from the id is
/// the gateway's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxnStep {
    /// Native-currency payment to an application's custody address.
    Payment {
        receiver_app: AppId,
        amount_micro_algos: u64,
        note: &'static str,
    },
    /// Asset transfer to an application's custody address.
    AssetTransfer {
        receiver_app: AppId,
        asset: AssetId,
        amount: u64,
        note: &'static str,
    },
    /// ABI method call on an application.
    AppCall {
        app: AppId,
        method: &'static str,
        args: Vec<ArgValue>,
        foreign_assets: Vec<AssetId>,
        foreign_apps: Vec<AppId>,
        extra_fee_micro_algos: u64,
    },
}

/// Result of a confirmed atomic group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupReceipt {
    pub tx_ids: Vec<String>,
    pub confirmed_round: u64,
    /// Return value of the group's method call, when it has one.
    pub return_value: Option<u64>,
}

/// Signs, submits, and confirms atomic transaction groups.
#[async_trait]
pub trait TransactionGateway: Send + Sync {
    /// Submit `steps` as one all-or-nothing group and wait for confirmation.
    ///
    /// # Errors
    ///
    /// [`ChainError::Submission`] when the group is rejected,
    /// [`ChainError::ConfirmationTimeout`] when it does not finalize inside
    /// the confirmation window.
    async fn submit_group(&self, steps: Vec<TxnStep>) -> Result<GroupReceipt, ChainError>;

    /// Address of the signing account.
    fn sender(&self) -> Address;
}

/// Reads the decoded global state of every open escrow under a market.
#[async_trait]
pub trait OrderRecords: Send + Sync {
    async fn open_orders(&self, market_app_id: AppId) -> Result<Vec<RawOrder>, FeedError>;
}

/// Account-level asset authorization.
#[async_trait]
pub trait Wallet: Send + Sync {
    async fn is_opted_in(&self, asset: AssetId) -> Result<bool, ChainError>;

    /// Opt the account into `asset` (zero-amount self-transfer).
    async fn opt_in(&self, asset: AssetId) -> Result<(), ChainError>;
}
