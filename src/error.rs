use thiserror::Error;

use crate::domain::{AssetId, DomainError};

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures fetching or decoding either external feed (reference odds or
/// market data). All recoverable: the loop logs and skips the cycle.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("event {event_id} not found in odds feed")]
    EventNotFound { event_id: String },

    #[error("no odds listed for {team}")]
    MissingTeamOdds { team: String },

    #[error("decimal odds must be greater than 1, got {odds}")]
    InvalidOdds { odds: f64 },

    #[error("malformed market payload: {reason}")]
    MalformedPayload { reason: String },
}

/// On-chain submission failures, split by how ambiguous they leave state.
#[derive(Error, Debug)]
pub enum ChainError {
    /// The atomic group was rejected outright; nothing landed on chain.
    #[error("atomic group rejected: {0}")]
    Submission(String),

    /// The group was submitted but not finalized inside the confirmation
    /// window. On-chain state is ambiguous; callers should reconcile before
    /// acting on the affected side again.
    #[error("confirmation window elapsed: {0}")]
    ConfirmationTimeout(String),

    /// The account lacks authorization for a referenced asset. Fatal until
    /// the wallet layer resolves it.
    #[error("account not opted in to asset {asset}")]
    NotOptedIn { asset: AssetId },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
