//! Vote casting.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;

use crate::domain::{EventId, UserId, Vote};
use crate::error::{InvalidRequest, Result};
use crate::store::{Store, StoreTx};

/// A vote submitted by a caller.
///
/// `magnitude` is expected to be positive; the transport layer validates
/// field content before the request reaches the core.
#[derive(Debug, Clone, Deserialize)]
pub struct VoteRequest {
    pub voter_id: UserId,
    pub event_id: EventId,
    pub magnitude: u32,
    pub cast_at: DateTime<Utc>,
}

/// Applies votes: debits the voter's budget, credits the event's score,
/// and appends an immutable vote record - atomically.
#[derive(Debug, Clone)]
pub struct VotingService<S> {
    store: S,
}

impl<S: Store> VotingService<S> {
    /// Create a voting service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Cast a vote against an event.
    ///
    /// Fails with [`InvalidRequest`] when the event or voter does not
    /// exist, or when `magnitude` exceeds the voter's remaining budget.
    /// No write happens on any failure path. On success returns the
    /// persisted [`Vote`].
    pub async fn vote(&self, request: VoteRequest) -> Result<Vote> {
        let mut tx = self.store.begin().await?;

        let Some(mut event) = tx.find_event(request.event_id).await? else {
            return Err(InvalidRequest::UnknownEvent {
                event_id: request.event_id,
            }
            .into());
        };
        let Some(mut voter) = tx.find_user(request.voter_id).await? else {
            return Err(InvalidRequest::UnknownUser {
                user_id: request.voter_id,
            }
            .into());
        };
        if request.magnitude > voter.budget {
            return Err(InvalidRequest::BudgetExceeded {
                magnitude: request.magnitude,
                remaining: voter.budget,
            }
            .into());
        }

        let vote = Vote::new(
            request.voter_id,
            request.event_id,
            request.magnitude,
            request.cast_at,
        );
        tx.save_vote(&vote).await?;

        voter.budget -= request.magnitude;
        tx.save_user(&voter).await?;

        event.score += request.magnitude;
        tx.save_event(&event).await?;

        tx.commit().await?;

        info!(
            voter = %vote.voter,
            event = %vote.event,
            magnitude = vote.magnitude,
            score = event.score,
            "vote recorded"
        );
        Ok(vote)
    }
}
