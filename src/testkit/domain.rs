//! Builders for entities and requests used across tests.
//!
//! Concise factory functions so tests focus on assertions rather than
//! construction boilerplate.

use chrono::Utc;

use crate::domain::{Event, EventId, Rank, User, UserId};
use crate::error::StoreError;
use crate::service::{TradeRequest, VoteRequest};
use crate::store::{MemoryStore, Store, StoreTx};

/// Create a [`User`] with the given id and budget.
pub fn user(id: u64, budget: u32) -> User {
    User::new(UserId::new(id), format!("user-{id}"), budget)
}

/// Create an [`Event`] with the given id, owned by `owner`, zero score,
/// no slot.
pub fn event(id: u64, owner: u64) -> Event {
    Event::new(
        EventId::new(id),
        format!("event-{id}"),
        "keyword",
        UserId::new(owner),
    )
}

/// Create a [`VoteRequest`] cast now.
pub fn vote_request(voter: u64, event: u64, magnitude: u32) -> VoteRequest {
    VoteRequest {
        voter_id: UserId::new(voter),
        event_id: EventId::new(event),
        magnitude,
        cast_at: Utc::now(),
    }
}

/// Create a [`TradeRequest`] for the given rank position and amount.
pub fn trade(rank: u32, amount: u32) -> TradeRequest {
    TradeRequest {
        rank: Rank::new(rank),
        amount,
    }
}

/// Commit the given users and events into a memory store.
pub async fn seed(
    store: &MemoryStore,
    users: &[User],
    events: &[Event],
) -> Result<(), StoreError> {
    let mut tx = store.begin().await?;
    for user in users {
        tx.save_user(user).await?;
    }
    for event in events {
        tx.save_event(event).await?;
    }
    tx.commit().await
}
