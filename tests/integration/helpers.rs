use std::error::Error;
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use fraudgen::Transaction;

pub const OUTPUT_FOLDER_PATH: &str = "test_output";

/// Path under the scratch output folder, creating the folder if needed.
pub fn output_path(file_name: &str) -> Result<PathBuf, Box<dyn Error>> {
    let folder_path = Path::new(OUTPUT_FOLDER_PATH);
    if !folder_path.exists() {
        create_dir_all(folder_path)?;
    }

    Ok(folder_path.join(file_name))
}

/// Reads a generated batch back from a CSV file.
pub fn read_batch_csv(path: &Path) -> Result<Vec<Transaction>, Box<dyn Error>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();

    for result in reader.deserialize() {
        let record: Transaction = result?;
        records.push(record);
    }

    Ok(records)
}
