//! Immutable vote records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{EventId, UserId, VoteId};

/// An immutable record of a cast vote.
///
/// Written once by the voting operation, never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub id: VoteId,
    /// When the caller cast the vote. Supplied by the caller, not stamped
    /// by the core, so replayed requests keep their original time.
    pub cast_at: DateTime<Utc>,
    /// How many budget points this vote spent. Always positive.
    pub magnitude: u32,
    pub voter: UserId,
    pub event: EventId,
}

impl Vote {
    /// Create a vote record with a fresh id.
    pub fn new(voter: UserId, event: EventId, magnitude: u32, cast_at: DateTime<Utc>) -> Self {
        Self {
            id: VoteId::new(),
            cast_at,
            magnitude,
            voter,
            event,
        }
    }
}
