//! Fault-injecting store wrapper for exercising rollback paths.

use crate::domain::{Event, EventId, Rank, Slot, User, UserId, Vote};
use crate::error::StoreError;
use crate::store::{MemoryStore, MemoryTx, Store, StoreTx};

/// Which store operation to sabotage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailPoint {
    SaveEvent,
    DeleteEvent,
    SaveUser,
    SaveVote,
    SaveSlot,
    Commit,
}

/// Wraps a [`MemoryStore`] and fails every invocation of one chosen
/// operation with [`StoreError::Backend`].
///
/// Reads always succeed, so a service gets past validation and dies
/// mid-write - exactly the path the rollback guarantee covers.
#[derive(Debug, Clone)]
pub struct FaultStore {
    inner: MemoryStore,
    fail_on: FailPoint,
}

impl FaultStore {
    /// Wrap `inner`, failing every `fail_on` operation.
    pub fn new(inner: MemoryStore, fail_on: FailPoint) -> Self {
        Self { inner, fail_on }
    }
}

impl Store for FaultStore {
    type Tx = FaultTx;

    async fn begin(&self) -> Result<FaultTx, StoreError> {
        Ok(FaultTx {
            inner: self.inner.begin().await?,
            fail_on: self.fail_on,
        })
    }
}

/// Transaction handed out by a [`FaultStore`].
pub struct FaultTx {
    inner: MemoryTx,
    fail_on: FailPoint,
}

impl FaultTx {
    fn trip(&self, point: FailPoint) -> Result<(), StoreError> {
        if self.fail_on == point {
            return Err(StoreError::Backend(format!("injected fault at {point:?}")));
        }
        Ok(())
    }
}

impl StoreTx for FaultTx {
    async fn find_event(&mut self, id: EventId) -> Result<Option<Event>, StoreError> {
        self.inner.find_event(id).await
    }

    async fn save_event(&mut self, event: &Event) -> Result<(), StoreError> {
        self.trip(FailPoint::SaveEvent)?;
        self.inner.save_event(event).await
    }

    async fn delete_event(&mut self, id: EventId) -> Result<bool, StoreError> {
        self.trip(FailPoint::DeleteEvent)?;
        self.inner.delete_event(id).await
    }

    async fn find_user(&mut self, id: UserId) -> Result<Option<User>, StoreError> {
        self.inner.find_user(id).await
    }

    async fn save_user(&mut self, user: &User) -> Result<(), StoreError> {
        self.trip(FailPoint::SaveUser)?;
        self.inner.save_user(user).await
    }

    async fn save_vote(&mut self, vote: &Vote) -> Result<(), StoreError> {
        self.trip(FailPoint::SaveVote)?;
        self.inner.save_vote(vote).await
    }

    async fn find_slot(&mut self, rank: Rank) -> Result<Option<Slot>, StoreError> {
        self.inner.find_slot(rank).await
    }

    async fn save_slot(&mut self, slot: &Slot) -> Result<(), StoreError> {
        self.trip(FailPoint::SaveSlot)?;
        self.inner.save_slot(slot).await
    }

    async fn commit(self) -> Result<(), StoreError> {
        self.trip(FailPoint::Commit)?;
        self.inner.commit().await
    }
}
