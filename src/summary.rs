use crate::domain::{RiskLevel, Transaction};

/// Per-level weights behind the dashboard's 0-100 risk meter.
const RISK_VALUE_LOW: u32 = 20;
const RISK_VALUE_MEDIUM: u32 = 50;
const RISK_VALUE_HIGH: u32 = 80;

/// Derived view of a batch, matching what the dashboard's stat cards show.
#[derive(serde::Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskSummary {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub total_amount: f64,
    /// Rounded mean of the per-level weights, 0 for an empty batch.
    pub average_risk: u32,
}

pub fn summarize(transactions: &[Transaction]) -> RiskSummary {
    let mut low = 0;
    let mut medium = 0;
    let mut high = 0;
    let mut total_amount = 0.0;

    for tx in transactions {
        match tx.risk_level {
            RiskLevel::Low => low += 1,
            RiskLevel::Medium => medium += 1,
            RiskLevel::High => high += 1,
        }
        total_amount += tx.amount;
    }

    let weighted = low as u64 * RISK_VALUE_LOW as u64
        + medium as u64 * RISK_VALUE_MEDIUM as u64
        + high as u64 * RISK_VALUE_HIGH as u64;
    let average_risk = if transactions.is_empty() {
        0
    } else {
        ((weighted as f64 / transactions.len() as f64).round()) as u32
    };

    RiskSummary {
        low,
        medium,
        high,
        total_amount,
        average_risk,
    }
}
