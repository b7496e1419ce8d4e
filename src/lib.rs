//! Oddsmith - sportsbook-odds-driven quoting for binary prediction markets.
//!
//! This crate quotes one binary-outcome market: it derives a passive limit
//! price from a reference odds feed, compares it against the resting
//! on-chain escrow order per side (YES/NO), and leaves, creates, or
//! cancel-and-replaces that order each polling cycle.
//!
//! # Architecture
//!
//! Pure decision logic is separated from every external surface:
//!
//! - **`domain`** - fixed-point money, the protocol fee formula, order book
//!   reconstruction from raw escrow records, and the requoting decision
//!   function with its hysteresis band
//! - **`port`** - trait definitions for the external collaborators: odds
//!   feed, market catalog, order records, wallet, and the transaction
//!   gateway that signs and submits atomic groups
//! - **`adapter`** - REST implementations (the-odds-api, the venue's market
//!   catalog) and an offline chain stand-in for dry runs
//! - **`app`** - the [`EscrowOrderManager`](app::EscrowOrderManager) owning
//!   the per-side order lifecycle and the [`QuoterSession`](app::QuoterSession)
//!   polling loop
//!
//! # Modules
//!
//! - [`config`] - TOML configuration with environment overrides for secrets
//! - [`domain`] - venue-agnostic quoting logic
//! - [`error`] - error taxonomy for the crate
//! - [`port`] - collaborator trait definitions
//! - [`adapter`] - REST clients and the offline chain
//! - [`app`] - session orchestration
//! - [`retry`] - bounded check-then-sleep polling
//!
//! # Example
//!
//! ```no_run
//! use oddsmith::domain::{decide, QuotePolicy};
//!
//! let policy = QuotePolicy {
//!     spread_offset: 50_000,
//!     requote_band: 30_000,
//!     quantity: 1_000_000,
//! };
//! let decision = decide(500_000, None, &policy).unwrap();
//! ```

pub mod adapter;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
pub mod retry;
