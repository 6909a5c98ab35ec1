//! Purchased rank slots.

use serde::{Deserialize, Serialize};

use super::id::{EventId, Rank};

/// A purchased rank position.
///
/// Identified by its rank number; at most one slot exists per rank. Once
/// created a slot always has an occupant - displacement swaps the occupant
/// and raises the stored amount, it never leaves the slot empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub rank: Rank,
    /// What the current occupant paid. A challenger must offer at least
    /// this much; ties go to the challenger.
    pub amount: u32,
    /// The event currently holding this rank. The event's `slot` field
    /// points back at `rank`.
    pub occupant: EventId,
}

impl Slot {
    /// Create a slot occupied by `occupant` at the given price.
    pub fn new(rank: Rank, amount: u32, occupant: EventId) -> Self {
        Self {
            rank,
            amount,
            occupant,
        }
    }
}
