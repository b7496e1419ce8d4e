//! Outbound adapters: REST clients for the external collaborators the repo
//! implements, plus the offline chain stand-in used by dry runs.

pub mod arcade;
pub mod odds;
pub mod offline;

pub use arcade::ArcadeClient;
pub use odds::{american_implied_probability, implied_probability, TheOddsApiClient};
pub use offline::OfflineChain;
