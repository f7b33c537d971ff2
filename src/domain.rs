use chrono::{DateTime, Utc};

/// A single synthetic transaction as the dashboard consumes it.
///
/// Field names serialize in camelCase so the JSON/CSV output matches the
/// front end's `Transaction` shape.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub date: DateTime<Utc>,
    pub vendor: String,
    pub amount: f64,
    pub risk_level: RiskLevel,
    pub category: Category,
    pub ip_country: String,
    pub vendor_country: String,
    pub time_since_last: u32,
}

#[derive(
    serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    #[serde(rename = "IT")]
    It,
    Office,
    Services,
    Travel,
    Cryptocurrency,
    Suspicious,
}

impl Category {
    /// Categories a baseline (non-injected) transaction can carry.
    /// `Suspicious` is reserved for the guaranteed-fraud tail.
    pub const BASELINE: [Category; 5] = [
        Category::It,
        Category::Office,
        Category::Services,
        Category::Travel,
        Category::Cryptocurrency,
    ];
}
