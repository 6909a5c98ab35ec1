//! Ranked list entries.

use serde::{Deserialize, Serialize};

use super::id::{EventId, Rank, UserId};

/// An entry on the ranked list.
///
/// `score` is mutated only by vote casting; `slot` only by rank trading.
/// The crate trusts field content (name length and the like) to have been
/// validated before the entity reached the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub keyword: String,
    /// Accumulated vote score.
    pub score: u32,
    /// The user who created this event.
    pub owner: UserId,
    /// The rank slot this event currently occupies, if it bought one.
    /// At most one at a time; the slot at that rank points back here.
    pub slot: Option<Rank>,
}

impl Event {
    /// Create an event with zero score and no slot occupancy.
    pub fn new(
        id: EventId,
        name: impl Into<String>,
        keyword: impl Into<String>,
        owner: UserId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            keyword: keyword.into(),
            score: 0,
            owner,
            slot: None,
        }
    }
}
