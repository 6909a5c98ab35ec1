//! In-memory store implementation.
//!
//! Backs the test suite and in-process composition. Entities live in an
//! arena of maps keyed by id; a transaction clones the arena, mutates the
//! clone, and swaps it back on commit while holding the store's single
//! writer lock for its whole lifetime. That gives the serialization the
//! operations require for free, at the cost of running transactions one
//! at a time.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use super::{Store, StoreTx};
use crate::domain::{Event, EventId, Rank, Slot, User, UserId, Vote, VoteId};
use crate::error::StoreError;

#[derive(Debug, Clone, Default)]
struct Arena {
    events: HashMap<EventId, Event>,
    users: HashMap<UserId, User>,
    votes: HashMap<VoteId, Vote>,
    slots: HashMap<Rank, Slot>,
}

/// In-memory store. Cheap to clone; clones share the same arena.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Arena>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All committed vote records, in no particular order.
    ///
    /// The vote collection is append-only and the core never reads it
    /// back, so this accessor exists for assertions rather than as part
    /// of the store port.
    pub async fn votes(&self) -> Vec<Vote> {
        self.inner.lock().await.votes.values().cloned().collect()
    }
}

impl Store for MemoryStore {
    type Tx = MemoryTx;

    async fn begin(&self) -> Result<MemoryTx, StoreError> {
        let guard = self.inner.clone().lock_owned().await;
        let working = guard.clone();
        Ok(MemoryTx { guard, working })
    }
}

/// A transaction against a [`MemoryStore`].
///
/// Holds the store's writer lock until committed or dropped.
pub struct MemoryTx {
    guard: OwnedMutexGuard<Arena>,
    working: Arena,
}

impl StoreTx for MemoryTx {
    async fn find_event(&mut self, id: EventId) -> Result<Option<Event>, StoreError> {
        Ok(self.working.events.get(&id).cloned())
    }

    async fn save_event(&mut self, event: &Event) -> Result<(), StoreError> {
        self.working.events.insert(event.id, event.clone());
        Ok(())
    }

    async fn delete_event(&mut self, id: EventId) -> Result<bool, StoreError> {
        Ok(self.working.events.remove(&id).is_some())
    }

    async fn find_user(&mut self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self.working.users.get(&id).cloned())
    }

    async fn save_user(&mut self, user: &User) -> Result<(), StoreError> {
        self.working.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn save_vote(&mut self, vote: &Vote) -> Result<(), StoreError> {
        self.working.votes.insert(vote.id.clone(), vote.clone());
        Ok(())
    }

    async fn find_slot(&mut self, rank: Rank) -> Result<Option<Slot>, StoreError> {
        Ok(self.working.slots.get(&rank).cloned())
    }

    async fn save_slot(&mut self, slot: &Slot) -> Result<(), StoreError> {
        self.working.slots.insert(slot.rank, slot.clone());
        Ok(())
    }

    async fn commit(self) -> Result<(), StoreError> {
        let MemoryTx { mut guard, working } = self;
        *guard = working;
        Ok(())
    }
}
