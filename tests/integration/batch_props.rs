use std::collections::HashSet;

use fraudgen::{generate_demo_data, summarize, Category, RiskLevel};

#[test]
fn test_batch_has_exactly_1010_records() {
    // Act
    let batch = generate_demo_data();

    // Assert
    assert_eq!(batch.len(), 1_010);
}

#[test]
fn test_every_amount_positive_and_two_decimal() {
    let batch = generate_demo_data();

    for tx in &batch {
        assert!(tx.amount > 0.0);
        assert_eq!(tx.amount, (tx.amount * 100.0).round() / 100.0);
    }
}

#[test]
fn test_guaranteed_fraud_records_present_after_shuffle() {
    let batch = generate_demo_data();

    let tail: Vec<_> = batch
        .iter()
        .filter(|tx| tx.id.starts_with("fraud-"))
        .collect();

    assert_eq!(tail.len(), 10);
    for tx in tail {
        assert_eq!(tx.risk_level, RiskLevel::High);
        assert_eq!(tx.category, Category::Suspicious);
        assert_eq!(tx.ip_country, "US");
        assert_eq!(tx.vendor_country, "RU");
        assert_eq!(tx.time_since_last, 30);
    }
}

#[test]
fn test_successive_batches_are_unrelated() {
    // Clock-seeded runs must not repeat vendors/amounts wholesale
    let batch_a = generate_demo_data();
    // Seeds come from the millisecond clock; make sure it has ticked
    std::thread::sleep(std::time::Duration::from_millis(5));
    let batch_b = generate_demo_data();

    let ids_a: HashSet<_> = batch_a
        .iter()
        .map(|tx| tx.id.clone())
        .filter(|id| id.starts_with("tx-"))
        .collect();
    let ids_b: HashSet<_> = batch_b
        .iter()
        .map(|tx| tx.id.clone())
        .filter(|id| id.starts_with("tx-"))
        .collect();

    assert!(ids_a.is_disjoint(&ids_b));
}

#[test]
fn test_summary_covers_whole_batch() {
    let batch = generate_demo_data();

    let summary = summarize(&batch);

    assert_eq!(summary.low + summary.medium + summary.high, batch.len());
    // Ten guaranteed-fraud records are always high
    assert!(summary.high >= 10);
    assert!(summary.average_risk >= 20 && summary.average_risk <= 80);
}
