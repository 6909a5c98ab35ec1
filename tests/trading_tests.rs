//! Tests for rank slot trading: fresh purchase, displacement, rejection.

use ranklist::domain::{Event, EventId, Rank, Slot};
use ranklist::error::{InvalidRequest, ServiceError};
use ranklist::service::TradingService;
use ranklist::store::{MemoryStore, Store, StoreTx};
use ranklist::testkit;

async fn get_event(store: &MemoryStore, id: u64) -> Option<Event> {
    let mut tx = store.begin().await.unwrap();
    tx.find_event(EventId::new(id)).await.unwrap()
}

async fn get_slot(store: &MemoryStore, rank: u32) -> Option<Slot> {
    let mut tx = store.begin().await.unwrap();
    tx.find_slot(Rank::new(rank)).await.unwrap()
}

/// Seed a store where event 1 holds rank 1 at the given amount and
/// event 2 exists unranked.
async fn seed_occupied(amount: u32) -> MemoryStore {
    let store = MemoryStore::new();
    let mut holder = testkit::event(1, 1);
    holder.slot = Some(Rank::new(1));
    testkit::seed(&store, &[], &[holder, testkit::event(2, 1)])
        .await
        .unwrap();

    let mut tx = store.begin().await.unwrap();
    tx.save_slot(&Slot::new(Rank::new(1), amount, EventId::new(1)))
        .await
        .unwrap();
    tx.commit().await.unwrap();
    store
}

#[tokio::test]
async fn fresh_buy_creates_slot_and_links_event() {
    let store = MemoryStore::new();
    testkit::seed(&store, &[], &[testkit::event(1, 1)])
        .await
        .unwrap();

    let service = TradingService::new(store.clone());
    let slot = service
        .buy(testkit::trade(1, 100), EventId::new(1))
        .await
        .unwrap();

    assert_eq!(slot, Slot::new(Rank::new(1), 100, EventId::new(1)));
    assert_eq!(get_slot(&store, 1).await.unwrap(), slot);
    assert_eq!(get_event(&store, 1).await.unwrap().slot, Some(Rank::new(1)));
}

#[tokio::test]
async fn displacement_updates_slot_and_deletes_previous_holder() {
    let store = seed_occupied(50).await;

    let service = TradingService::new(store.clone());
    let slot = service
        .buy(testkit::trade(1, 100), EventId::new(2))
        .await
        .unwrap();

    assert_eq!(slot, Slot::new(Rank::new(1), 100, EventId::new(2)));
    assert_eq!(get_slot(&store, 1).await.unwrap(), slot);
    assert_eq!(get_event(&store, 2).await.unwrap().slot, Some(Rank::new(1)));
    // The displaced event does not survive eviction.
    assert!(get_event(&store, 1).await.is_none());
}

#[tokio::test]
async fn underbid_fails_and_changes_nothing() {
    let store = seed_occupied(200).await;

    let service = TradingService::new(store.clone());
    let err = service
        .buy(testkit::trade(1, 100), EventId::new(2))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::InvalidRequest(InvalidRequest::AmountNotEnough {
            offered: 100,
            held: 200,
        })
    ));
    assert_eq!(err.to_string(), "trade amount not enough");

    let slot = get_slot(&store, 1).await.unwrap();
    assert_eq!(slot.amount, 200);
    assert_eq!(slot.occupant, EventId::new(1));
    assert_eq!(get_event(&store, 1).await.unwrap().slot, Some(Rank::new(1)));
    assert_eq!(get_event(&store, 2).await.unwrap().slot, None);
}

#[tokio::test]
async fn equal_amount_goes_to_the_challenger() {
    let store = seed_occupied(50).await;

    let service = TradingService::new(store.clone());
    let slot = service
        .buy(testkit::trade(1, 50), EventId::new(2))
        .await
        .unwrap();

    assert_eq!(slot.occupant, EventId::new(2));
    assert_eq!(slot.amount, 50);
    assert!(get_event(&store, 1).await.is_none());
}

#[tokio::test]
async fn rebuying_own_slot_updates_amount_without_eviction() {
    let store = seed_occupied(50).await;

    let service = TradingService::new(store.clone());
    let slot = service
        .buy(testkit::trade(1, 80), EventId::new(1))
        .await
        .unwrap();

    assert_eq!(slot.occupant, EventId::new(1));
    assert_eq!(slot.amount, 80);
    assert!(get_event(&store, 1).await.is_some());
}

#[tokio::test]
async fn repeated_equal_buys_keep_succeeding() {
    let store = seed_occupied(50).await;

    let service = TradingService::new(store.clone());
    service
        .buy(testkit::trade(1, 50), EventId::new(1))
        .await
        .unwrap();
    service
        .buy(testkit::trade(1, 50), EventId::new(1))
        .await
        .unwrap();

    assert_eq!(get_slot(&store, 1).await.unwrap().amount, 50);
    assert!(get_event(&store, 1).await.is_some());
}

#[tokio::test]
async fn buying_for_unknown_event_fails() {
    let store = MemoryStore::new();

    let service = TradingService::new(store.clone());
    let err = service
        .buy(testkit::trade(1, 100), EventId::new(9))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::InvalidRequest(InvalidRequest::UnknownEvent { .. })
    ));
    assert_eq!(err.to_string(), "invalid event id");
    assert!(get_slot(&store, 1).await.is_none());
}

#[tokio::test]
async fn distinct_ranks_hold_independent_slots() {
    let store = MemoryStore::new();
    testkit::seed(&store, &[], &[testkit::event(1, 1), testkit::event(2, 1)])
        .await
        .unwrap();

    let service = TradingService::new(store.clone());
    service
        .buy(testkit::trade(1, 100), EventId::new(1))
        .await
        .unwrap();
    service
        .buy(testkit::trade(2, 10), EventId::new(2))
        .await
        .unwrap();

    assert_eq!(get_slot(&store, 1).await.unwrap().occupant, EventId::new(1));
    assert_eq!(get_slot(&store, 2).await.unwrap().occupant, EventId::new(2));
    assert!(get_event(&store, 1).await.is_some());
    assert!(get_event(&store, 2).await.is_some());
}
