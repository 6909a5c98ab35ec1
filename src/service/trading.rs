//! Rank slot trading.

use serde::Deserialize;
use tracing::info;

use crate::domain::{EventId, Rank, Slot};
use crate::error::{InvalidRequest, Result};
use crate::store::{Store, StoreTx};

/// A rank purchase submitted by a caller.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TradeRequest {
    pub rank: Rank,
    pub amount: u32,
}

/// Applies rank purchases: fresh occupancy of an unsold rank, or
/// displacement of the current holder by an equal-or-greater offer.
#[derive(Debug, Clone)]
pub struct TradingService<S> {
    store: S,
}

impl<S: Store> TradingService<S> {
    /// Create a trading service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Buy the slot at `request.rank` for the event `event_id`.
    ///
    /// A rank with no slot yet is sold at face value. An occupied rank
    /// requires `amount >= slot.amount`; ties go to the challenger. On
    /// displacement the previous occupant is deleted from the store
    /// outright - the list keeps no record of evicted events.
    ///
    /// Fails with [`InvalidRequest`] when the event does not exist or the
    /// offer is below the held amount; nothing is written on failure.
    /// Returns the resulting [`Slot`].
    pub async fn buy(&self, request: TradeRequest, event_id: EventId) -> Result<Slot> {
        let mut tx = self.store.begin().await?;

        let Some(mut challenger) = tx.find_event(event_id).await? else {
            return Err(InvalidRequest::UnknownEvent { event_id }.into());
        };

        let slot = match tx.find_slot(request.rank).await? {
            None => {
                let slot = Slot::new(request.rank, request.amount, event_id);
                tx.save_slot(&slot).await?;

                challenger.slot = Some(request.rank);
                tx.save_event(&challenger).await?;
                slot
            }
            Some(mut slot) => {
                if request.amount < slot.amount {
                    return Err(InvalidRequest::AmountNotEnough {
                        offered: request.amount,
                        held: slot.amount,
                    }
                    .into());
                }

                let displaced = slot.occupant;
                slot.occupant = event_id;
                slot.amount = request.amount;

                challenger.slot = Some(request.rank);
                tx.save_event(&challenger).await?;

                // Re-buying a slot one already holds is an amount update,
                // not a self-eviction.
                if displaced != event_id {
                    tx.delete_event(displaced).await?;
                }

                tx.save_slot(&slot).await?;
                slot
            }
        };

        tx.commit().await?;

        info!(
            rank = %slot.rank,
            amount = slot.amount,
            occupant = %slot.occupant,
            "rank slot purchased"
        );
        Ok(slot)
    }
}
