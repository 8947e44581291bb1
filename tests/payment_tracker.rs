use eventflow_payments::store::memory::MemoryStore;
use eventflow_payments::store::KeyValueStore;
use eventflow_payments::tracker::{PaymentTracker, SavePayment, PAYMENTS_KEY};
use std::sync::Arc;

#[tokio::test]
async fn save_is_idempotent_by_reference() {
    let tracker = tracker();

    let first = tracker
        .save_payment(sample("EVT_1_1000_a1", "1", 5000, 2))
        .await
        .unwrap();
    let second = tracker
        .save_payment(sample("EVT_1_1000_a1", "1", 9999, 5))
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.amount_minor, 5000);
    assert_eq!(tracker.get_payments().await.unwrap().len(), 1);
}

#[tokio::test]
async fn saved_record_gets_synthetic_fields() {
    let tracker = tracker();

    tracker
        .save_payment(sample("EVT_1_1000_a1", "1", 5000, 2))
        .await
        .unwrap();

    let found = tracker
        .get_payment_by_reference("EVT_1_1000_a1")
        .await
        .unwrap()
        .expect("payment should be tracked");
    assert_eq!(found.amount_minor, 5000);
    assert!(!found.id.is_empty());
    assert!(found.tracked_at <= chrono::Utc::now());
}

#[tokio::test]
async fn event_lookup_returns_newest_first() {
    let tracker = tracker();

    tracker.save_payment(sample("ref_a", "7", 1000, 1)).await.unwrap();
    tracker.save_payment(sample("ref_b", "7", 2000, 1)).await.unwrap();
    tracker.save_payment(sample("ref_c", "8", 3000, 1)).await.unwrap();

    let payments = tracker.get_payments_by_event("7").await.unwrap();
    assert_eq!(payments.len(), 2);
    assert_eq!(payments[0].reference, "ref_b");
    assert_eq!(payments[1].reference, "ref_a");
}

#[tokio::test]
async fn aggregates_follow_save_and_clear() {
    let tracker = tracker();

    tracker.save_payment(sample("r1", "1", 5000, 2)).await.unwrap();
    tracker.save_payment(sample("r2", "1", 2500, 3)).await.unwrap();

    assert_eq!(tracker.get_total_revenue().await.unwrap(), 7500);
    assert_eq!(tracker.get_tickets_sold().await.unwrap(), 5);

    tracker.clear_payments().await.unwrap();

    assert!(tracker.get_payments().await.unwrap().is_empty());
    assert_eq!(tracker.get_total_revenue().await.unwrap(), 0);
    assert_eq!(tracker.get_tickets_sold().await.unwrap(), 0);
}

#[tokio::test]
async fn corrupt_stored_collection_reads_as_empty() {
    let store = Arc::new(MemoryStore::new());
    store.set(PAYMENTS_KEY, "{not json").await.unwrap();
    let tracker = PaymentTracker::new(store);

    assert!(tracker.get_payments().await.unwrap().is_empty());
    assert_eq!(tracker.get_total_revenue().await.unwrap(), 0);

    let saved = tracker.save_payment(sample("r1", "1", 100, 1)).await.unwrap();
    assert_eq!(saved.reference, "r1");
    assert_eq!(tracker.get_payments().await.unwrap().len(), 1);
}

fn tracker() -> PaymentTracker {
    PaymentTracker::new(Arc::new(MemoryStore::new()))
}

fn sample(reference: &str, event_id: &str, amount_minor: i64, tickets: u32) -> SavePayment {
    SavePayment {
        reference: reference.to_string(),
        event_id: event_id.to_string(),
        event_title: "Test Event".to_string(),
        amount_minor,
        tickets,
        email: None,
    }
}
