use std::fs::File;
use std::process::Command;

use fraudgen::{RiskLevel, Transaction};

use crate::helpers::{output_path, read_batch_csv};

#[test]
fn test_e2e_csv_export() {
    /* Arrange */
    let file_path = output_path("e2e_batch.csv").expect("failed to prepare output folder");

    /* Act */
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--"])
        .arg(&file_path)
        .args(["--format", "csv", "--seed", "42"])
        .output()
        .expect("Failed to execute app");

    /* Assert */
    assert!(
        output.status.success(),
        "app exited with failure: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let batch = read_batch_csv(&file_path).expect("failed to read exported CSV");
    assert_eq!(batch.len(), 1_010);

    let fraud_tail: Vec<_> = batch
        .iter()
        .filter(|tx| tx.id.starts_with("fraud-"))
        .collect();
    assert_eq!(fraud_tail.len(), 10);
    assert!(fraud_tail
        .iter()
        .all(|tx| tx.risk_level == RiskLevel::High));

    let _ = std::fs::remove_file(file_path);
}

#[test]
fn test_e2e_json_export() {
    /* Arrange */
    let file_path = output_path("e2e_batch.json").expect("failed to prepare output folder");

    /* Act */
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--"])
        .arg(&file_path)
        .args(["--format", "json", "--seed", "7"])
        .output()
        .expect("Failed to execute app");

    /* Assert */
    assert!(
        output.status.success(),
        "app exited with failure: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let file = File::open(&file_path).expect("output file missing");
    let batch: Vec<Transaction> =
        serde_json::from_reader(file).expect("failed to parse exported JSON");
    assert_eq!(batch.len(), 1_010);

    let _ = std::fs::remove_file(file_path);
}

#[test]
fn test_e2e_rejects_missing_arguments() {
    let output = Command::new("cargo")
        .args(["run", "--quiet"])
        .output()
        .expect("Failed to execute app");

    // main propagates AppError::ArgsError, which lands on stderr
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ArgsError"), "stderr was: {}", stderr);
}
