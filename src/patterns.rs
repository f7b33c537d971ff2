use chrono::{TimeZone, Utc};
use rand::Rng;

use crate::domain::{Category, Transaction};
use crate::synth;

/// Fraud typologies injected into a slice of each batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FraudPattern {
    HighAmountNewVendor,
    CountryMismatch,
    RapidTransactions,
    CategoryAnomaly,
    DuplicatePayment,
    AfterHoursActivity,
}

impl FraudPattern {
    pub const ALL: [FraudPattern; 6] = [
        FraudPattern::HighAmountNewVendor,
        FraudPattern::CountryMismatch,
        FraudPattern::RapidTransactions,
        FraudPattern::CategoryAnomaly,
        FraudPattern::DuplicatePayment,
        FraudPattern::AfterHoursActivity,
    ];
}

/// Selection weights consulted against `(index % 4) + 1`.
pub const PATTERN_WEIGHTS: [f64; 4] = [0.4, 0.3, 0.2, 0.1];

const MISMATCH_COUNTRIES: [&str; 3] = ["NG", "RU", "CN"];

/// Length of the after-hours window (22:00 to 05:00) in seconds.
const AFTER_HOURS_SPAN: i64 = 7 * 3_600;

/// Picks a pattern from the (already shuffled) list for the fraud record at
/// `index`. Each weight gets its own uniform draw compared against
/// `w * ((index % 4) + 1)`; the first weight that passes selects that slot,
/// otherwise the first pattern wins.
///
/// The rule is intentionally not a normalized distribution (e.g. when
/// `index % 4 == 3` the first weight always passes, and slots 4 and 5 are
/// only reachable through the fallback shuffle placement). It is kept
/// bit-for-bit because downstream demo fixtures depend on its branching;
/// revisit only if a principled weighting is ever required.
pub fn select_pattern<R: Rng>(
    patterns: &[FraudPattern],
    index: usize,
    rng: &mut R,
) -> FraudPattern {
    let step = (index % 4) as f64 + 1.0;
    let slot = PATTERN_WEIGHTS
        .iter()
        .position(|&w| rng.gen::<f64>() < w * step);

    match slot {
        Some(i) => patterns[i],
        None => patterns[0],
    }
}

/// Mutates `tx` to resemble the given typology. `batch` is the batch built
/// so far; `DuplicatePayment` copies an amount from it and is a no-op when
/// it is still empty.
pub fn apply_pattern<R: Rng>(
    pattern: FraudPattern,
    tx: &mut Transaction,
    batch: &[Transaction],
    rng: &mut R,
) {
    match pattern {
        FraudPattern::HighAmountNewVendor => {
            tx.amount = rng.gen_range(10_000.0..50_000.0);
            tx.vendor = format!("New Vendor {}", synth::alphanumeric(rng, 5));
        }
        FraudPattern::CountryMismatch => {
            tx.ip_country = "US".to_string();
            tx.vendor_country =
                MISMATCH_COUNTRIES[rng.gen_range(0..MISMATCH_COUNTRIES.len())].to_string();
        }
        FraudPattern::RapidTransactions => {
            tx.time_since_last = rng.gen_range(1..=59);
        }
        FraudPattern::CategoryAnomaly => {
            tx.category = Category::Cryptocurrency;
        }
        FraudPattern::DuplicatePayment => {
            if !batch.is_empty() {
                tx.amount = batch[rng.gen_range(0..batch.len())].amount;
            }
        }
        FraudPattern::AfterHoursActivity => {
            // Fixed reference night, 2024-03-01 22:00 UTC to 2024-03-02 05:00 UTC
            let window_start = Utc.with_ymd_and_hms(2024, 3, 1, 22, 0, 0).unwrap();
            tx.date = window_start + chrono::Duration::seconds(rng.gen_range(0..AFTER_HOURS_SPAN));
        }
    }
}
