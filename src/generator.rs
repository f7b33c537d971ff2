use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::domain::{Category, RiskLevel, Transaction};
use crate::patterns::{self, FraudPattern};
use crate::risk;
use crate::synth;

/// Varied records per batch.
pub const BATCH_SIZE: usize = 1_000;
/// Fixed high-risk records appended to every batch.
pub const GUARANTEED_FRAUD_COUNT: usize = 10;

pub const BASE_FRAUD_RATE: f64 = 0.3;
pub const FRAUD_VARIANCE: f64 = 0.15;

/// Generates a full demo batch of 1010 transactions.
///
/// Seeds a fresh generator from the wall clock so successive calls produce
/// unrelated datasets. Use [`generate_demo_data_with_rng`] with a fixed
/// seed when a run has to be reproducible.
pub fn generate_demo_data() -> Vec<Transaction> {
    let seed = Utc::now().timestamp_millis() as u64;
    let mut rng = StdRng::seed_from_u64(seed);
    generate_demo_data_with_rng(&mut rng)
}

/// Same as [`generate_demo_data`], with every random draw taken from the
/// caller's source.
pub fn generate_demo_data_with_rng<R: Rng>(rng: &mut R) -> Vec<Transaction> {
    let mut patterns = FraudPattern::ALL;
    patterns.shuffle(rng);

    let fraud_rate = draw_fraud_rate(rng);
    let total_fraud = (BATCH_SIZE as f64 * fraud_rate).floor() as usize;

    let mut batch: Vec<Transaction> = Vec::with_capacity(BATCH_SIZE + GUARANTEED_FRAUD_COUNT);

    for i in 0..BATCH_SIZE {
        let mut tx = synthesize_baseline(rng);

        // The first total_fraud records carry an injected typology
        if i < total_fraud {
            let pattern = patterns::select_pattern(&patterns, i, rng);
            patterns::apply_pattern(pattern, &mut tx, &batch, rng);
        }

        // Finalize: round, then score off the final field values
        tx.amount = synth::round_to_two_decimals(tx.amount);
        tx.risk_level = risk::calculate_risk_level(&tx, rng);

        batch.push(tx);
    }

    for i in 0..GUARANTEED_FRAUD_COUNT {
        batch.push(guaranteed_fraud(i, rng));
    }

    batch.shuffle(rng);

    debug!(
        total = batch.len(),
        fraud_rate, total_fraud, "generated demo batch"
    );

    batch
}

/// Uniform in [BASE - VARIANCE, BASE + VARIANCE), i.e. [0.15, 0.45).
fn draw_fraud_rate<R: Rng>(rng: &mut R) -> f64 {
    BASE_FRAUD_RATE + (rng.gen::<f64>() * FRAUD_VARIANCE * 2.0 - FRAUD_VARIANCE)
}

fn synthesize_baseline<R: Rng>(rng: &mut R) -> Transaction {
    Transaction {
        id: synth::transaction_id(rng),
        date: synth::recent_date(rng, 30),
        vendor: synth::company_name(rng),
        amount: rng.gen_range(50.0..10_000.0),
        risk_level: RiskLevel::Low, // placeholder until finalization
        category: Category::BASELINE[rng.gen_range(0..Category::BASELINE.len())],
        ip_country: synth::country_code(rng),
        vendor_country: synth::country_code(rng),
        time_since_last: rng.gen_range(60..=86_400),
    }
}

/// One of the ten fixed high-risk records appended to every batch. The risk
/// label is hardcoded rather than recomputed.
fn guaranteed_fraud<R: Rng>(index: usize, rng: &mut R) -> Transaction {
    Transaction {
        id: format!("fraud-{}", index),
        date: Utc::now(),
        vendor: format!("New Vendor {}", synth::alphanumeric(rng, 5)),
        amount: synth::round_to_two_decimals(15_000.0 + rng.gen::<f64>() * 35_000.0),
        risk_level: RiskLevel::High,
        category: Category::Suspicious,
        ip_country: "US".to_string(),
        vendor_country: "RU".to_string(),
        time_since_last: 30,
    }
}
