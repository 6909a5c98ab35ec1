//! Persistence ports for the ranked list.
//!
//! The core never talks to a database directly. It opens a [`StoreTx`]
//! through a [`Store`], does all reads and writes of one operation inside
//! it, and commits at the end. Dropping a transaction without committing
//! discards every buffered write, so a store fault mid-operation can never
//! leave partial state visible.

mod memory;

pub use memory::{MemoryStore, MemoryTx};

use std::future::Future;

use crate::domain::{Event, EventId, Rank, Slot, User, UserId, Vote};
use crate::error::StoreError;

/// Handle to a persistence backend.
///
/// Implementations decide how a transaction maps onto their technology
/// (database transaction, single-writer lock, optimistic versioning); the
/// core only requires that concurrent transactions touching the same rank
/// or user serialize, so every check runs against a consistent snapshot.
pub trait Store: Send + Sync {
    type Tx: StoreTx;

    /// Open a transaction.
    fn begin(&self) -> impl Future<Output = Result<Self::Tx, StoreError>> + Send;
}

/// One logical transaction over the four collections.
///
/// Writes become visible to other transactions only after [`commit`]
/// returns. Dropping the transaction without committing rolls back.
///
/// [`commit`]: StoreTx::commit
pub trait StoreTx: Send {
    /// Get an event by ID.
    fn find_event(
        &mut self,
        id: EventId,
    ) -> impl Future<Output = Result<Option<Event>, StoreError>> + Send;

    /// Save an event, replacing if it exists.
    fn save_event(&mut self, event: &Event) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Delete an event by ID. Returns whether it existed.
    fn delete_event(&mut self, id: EventId)
        -> impl Future<Output = Result<bool, StoreError>> + Send;

    /// Get a user by ID.
    fn find_user(
        &mut self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, StoreError>> + Send;

    /// Save a user, replacing if it exists.
    fn save_user(&mut self, user: &User) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Append an immutable vote record.
    fn save_vote(&mut self, vote: &Vote) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Get the slot sold at a rank.
    fn find_slot(
        &mut self,
        rank: Rank,
    ) -> impl Future<Output = Result<Option<Slot>, StoreError>> + Send;

    /// Save a slot, replacing if it exists.
    fn save_slot(&mut self, slot: &Slot) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Make every buffered write visible atomically.
    fn commit(self) -> impl Future<Output = Result<(), StoreError>> + Send;
}
