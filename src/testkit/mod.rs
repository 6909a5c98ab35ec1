//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] — Builders for entities and requests: users, events,
//!   votes, trades.
//! - [`store`] — [`FaultStore`](store::FaultStore), a wrapper that fails
//!   a chosen store operation to exercise rollback paths.

pub mod domain;
pub mod store;

pub use domain::{event, seed, trade, user, vote_request};
pub use store::{FailPoint, FaultStore};
