//! Entity types for the ranked list.

mod event;
mod id;
mod slot;
mod user;
mod vote;

pub use event::Event;
pub use id::{EventId, Rank, UserId, VoteId};
pub use slot::Slot;
pub use user::User;
pub use vote::Vote;
