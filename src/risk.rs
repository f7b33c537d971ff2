use rand::Rng;

use crate::domain::{Category, RiskLevel, Transaction};

/// Classification thresholds are drawn fresh on every call:
/// high in [MIN, MIN + SPREAD), likewise for medium.
pub const HIGH_THRESHOLD_MIN: f64 = 70.0;
pub const HIGH_THRESHOLD_SPREAD: f64 = 10.0;
pub const MEDIUM_THRESHOLD_MIN: f64 = 40.0;
pub const MEDIUM_THRESHOLD_SPREAD: f64 = 15.0;

/// Additive heuristic score over the transaction's current field values.
pub fn risk_score(tx: &Transaction) -> u32 {
    let mut score = 0;

    // Amount
    if tx.amount > 10_000.0 {
        score += 40;
    } else if tx.amount > 5_000.0 {
        score += 20;
    }

    // Vendor
    if tx.vendor.contains("Unknown") || tx.vendor.contains("New Vendor") {
        score += 30;
    }

    // Geography
    if tx.ip_country != tx.vendor_country {
        score += 25;
    }

    // Timing
    if tx.time_since_last < 60 {
        score += 35;
    }

    // Category
    if tx.category == Category::Cryptocurrency {
        score += 30;
    }

    score
}

/// Maps a score to a label against per-call randomized thresholds.
///
/// Two calls on the same transaction may disagree near a boundary; the
/// dashboard relies on that to vary demo data between renders. Pin the
/// randomness source in tests that need a stable label.
pub fn calculate_risk_level<R: Rng>(tx: &Transaction, rng: &mut R) -> RiskLevel {
    let score = risk_score(tx) as f64;

    let high = HIGH_THRESHOLD_MIN + rng.gen::<f64>() * HIGH_THRESHOLD_SPREAD;
    let medium = MEDIUM_THRESHOLD_MIN + rng.gen::<f64>() * MEDIUM_THRESHOLD_SPREAD;

    if score > high {
        RiskLevel::High
    } else if score > medium {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
