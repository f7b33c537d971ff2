use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use csv::Writer;
use thiserror::Error;

use crate::domain::Transaction;

#[derive(Error, Debug)]
pub enum CsvWriteError {
    #[error("Failed to create output file: {0}")]
    IoWriteError(String),

    #[error("Failed to serialize transaction record: {0}")]
    SerializeError(String),
}

/// Writes a batch as CSV, one header row plus one row per transaction.
pub fn write_csv<P: AsRef<Path>>(
    path: P,
    transactions: &[Transaction],
) -> Result<(), CsvWriteError> {
    let file = File::create(&path)
        .map_err(|err| CsvWriteError::IoWriteError(err.to_string()))?;
    let mut writer = Writer::from_writer(BufWriter::new(file));

    for tx in transactions {
        writer
            .serialize(tx)
            .map_err(|err| CsvWriteError::SerializeError(err.to_string()))?;
    }

    writer
        .flush()
        .map_err(|err| CsvWriteError::IoWriteError(err.to_string()))?;

    Ok(())
}
