//! Venue-agnostic domain logic: fixed-point money, the fee formula, order
//! book reconstruction, and the requoting decision function.

mod error;
mod fee;
mod id;
mod market;
mod money;
mod order;
mod orderbook;
mod quote;

pub use error::DomainError;
pub use fee::execution_fee;
pub use id::{Address, AppId, AssetId, EscrowId};
pub use market::{Market, FEE_BASE_MICROS, FUNDING_ASSET};
pub use money::{
    from_micros, percent_to_price, price_to_percent, round_to_two_significant, to_micros, Price,
    Quantity, MICRO_UNIT,
};
pub use order::{Direction, RawOrder, Side};
pub use orderbook::{OrderBook, OrderbookEntry, SideBook};
pub use quote::{decide, QuoteDecision, QuotePolicy, RestingQuote};
