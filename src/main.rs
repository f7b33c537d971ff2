use std::env;
use std::fs::File;
use std::io::BufWriter;

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fraudgen::csv_writer::{write_csv, CsvWriteError};
use fraudgen::generator::{generate_demo_data, generate_demo_data_with_rng};
use fraudgen::summary::summarize;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    CsvWrite(#[from] CsvWriteError),
    #[error("Failed to write JSON output: {0}")]
    JsonWrite(String),
    #[error("Usage: fraudgen <output-path> [--format csv|json] [--seed N]")]
    ArgsError,
    #[error("Unknown output format: {0} (expected csv or json)")]
    UnknownFormat(String),
    #[error("Seed must be an unsigned integer, got: {0}")]
    InvalidSeed(String),
}

enum OutputFormat {
    Csv,
    Json,
}

struct Args {
    output_path: String,
    format: OutputFormat,
    seed: Option<u64>,
}

fn parse_args(args: &[String]) -> Result<Args, AppError> {
    // First argument is the output path, the rest are flag pairs
    let output_path = args.first().ok_or(AppError::ArgsError)?.clone();

    let mut format = OutputFormat::Csv;
    let mut seed = None;

    let mut rest = args[1..].iter();
    while let Some(flag) = rest.next() {
        let value = rest.next().ok_or(AppError::ArgsError)?;
        match flag.as_str() {
            "--format" => {
                format = match value.as_str() {
                    "csv" => OutputFormat::Csv,
                    "json" => OutputFormat::Json,
                    other => return Err(AppError::UnknownFormat(other.to_string())),
                };
            }
            "--seed" => {
                let parsed = value
                    .parse::<u64>()
                    .map_err(|_| AppError::InvalidSeed(value.clone()))?;
                seed = Some(parsed);
            }
            _ => return Err(AppError::ArgsError),
        }
    }

    Ok(Args {
        output_path,
        format,
        seed,
    })
}

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let raw: Vec<String> = env::args().skip(1).collect();
    let args = parse_args(&raw)?;

    let batch = match args.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_demo_data_with_rng(&mut rng)
        }
        None => generate_demo_data(),
    };

    let summary = summarize(&batch);
    info!(
        total = batch.len(),
        low = summary.low,
        medium = summary.medium,
        high = summary.high,
        average_risk = summary.average_risk,
        "generated demo batch"
    );

    match args.format {
        OutputFormat::Csv => write_csv(&args.output_path, &batch)?,
        OutputFormat::Json => {
            let file = File::create(&args.output_path)
                .map_err(|err| AppError::JsonWrite(err.to_string()))?;
            serde_json::to_writer_pretty(BufWriter::new(file), &batch)
                .map_err(|err| AppError::JsonWrite(err.to_string()))?;
        }
    }

    info!(path = %args.output_path, "wrote demo batch");

    Ok(())
}
