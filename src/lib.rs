pub mod csv_writer;
pub mod domain;
pub mod generator;
pub mod patterns;
pub mod risk;
pub mod summary;
pub mod synth;

pub use csv_writer::{write_csv, CsvWriteError};
pub use domain::{Category, RiskLevel, Transaction};
pub use generator::{generate_demo_data, generate_demo_data_with_rng};
pub use patterns::{apply_pattern, select_pattern, FraudPattern};
pub use risk::{calculate_risk_level, risk_score};
pub use summary::{summarize, RiskSummary};
