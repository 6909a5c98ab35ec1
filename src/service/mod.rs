//! The two core operations over the store.
//!
//! Both services are stateless: each call opens one transaction, validates
//! every precondition before the first write, and commits at the end.
//! Validation failures surface as
//! [`InvalidRequest`](crate::error::InvalidRequest) before anything is
//! written; store faults roll the whole operation back.

mod trading;
mod voting;

pub use trading::{TradeRequest, TradingService};
pub use voting::{VoteRequest, VotingService};
