//! Ranklist - transactional core for a ranked event list.
//!
//! Users spend a finite vote budget to raise an event's score, and can buy
//! a numbered rank slot for an event by paying at least the amount the
//! current holder paid, displacing them.
//!
//! # Architecture
//!
//! The crate is the business core only; HTTP/CLI transport, durable
//! persistence, and authentication are collaborators that sit outside it:
//!
//! - **[`domain`]** - Entity types (`Event`, `User`, `Vote`, `Slot`) and
//!   id newtypes.
//! - **[`store`]** - The persistence port: a [`Store`](store::Store) hands
//!   out a [`StoreTx`](store::StoreTx) transaction; every operation runs
//!   inside exactly one. [`MemoryStore`](store::MemoryStore) is the
//!   in-process arena implementation.
//! - **[`service`]** - The two operations:
//!   [`VotingService`](service::VotingService) and
//!   [`TradingService`](service::TradingService).
//! - [`config`] - Configuration loading from TOML files, logging setup.
//! - [`error`] - Error types for the crate.
//!
//! # Example
//!
//! ```
//! use ranklist::domain::{Event, EventId, User, UserId};
//! use ranklist::service::{VoteRequest, VotingService};
//! use ranklist::store::{MemoryStore, Store, StoreTx};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryStore::new();
//!
//! let mut tx = store.begin().await?;
//! tx.save_user(&User::new(UserId::new(1), "ana", 10)).await?;
//! tx.save_event(&Event::new(EventId::new(1), "rust 2.0", "tech", UserId::new(1)))
//!     .await?;
//! tx.commit().await?;
//!
//! let voting = VotingService::new(store.clone());
//! let vote = voting
//!     .vote(VoteRequest {
//!         voter_id: UserId::new(1),
//!         event_id: EventId::new(1),
//!         magnitude: 3,
//!         cast_at: chrono::Utc::now(),
//!     })
//!     .await?;
//! assert_eq!(vote.magnitude, 3);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod store;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
