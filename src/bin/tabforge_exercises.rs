//! tabforge-exercises: Export a gym exercise dataset as importable JSON
//!
//! The dataset has to be downloaded beforehand (it is a CSV with a header
//! row). Column names are matched loosely: "Title"/"name" for the exercise
//! name, "BodyPart"/"body_part"/"target", "Equipment", "Type"/"category".
//!
//! Usage:
//!   # Read a downloaded dataset, write gym-exercises-export.json
//!   tabforge-exercises megaGymDataset.csv
//!
//!   # Read from stdin, compact JSON to stdout
//!   cat megaGymDataset.csv | tabforge-exercises --compact -o -

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn, LevelFilter};
use std::fs::File;
use std::io::{stdout, BufWriter};
use std::path::{Path, PathBuf};
use tabforge::exercises::{exercises_from_table, write_exercises, ColumnMap};
use tabforge::logging::init_logger;
use tabforge::{CsvDatasetSource, DatasetSource};

#[derive(Parser, Debug)]
#[command(name = "tabforge-exercises", version)]
#[command(about = "Export a gym exercise dataset as a JSON array", long_about = None)]
struct Args {
    /// Dataset CSV file (use stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output path, or "-" for stdout
    #[arg(long, short = 'o', default_value = "gym-exercises-export.json")]
    output: PathBuf,

    /// Compact output (no pretty-printing)
    #[arg(long)]
    compact: bool,

    /// Log level (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<LevelFilter>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level, LevelFilter::Info).context("Failed to initialize logger")?;

    let source = match &args.input {
        Some(path) => CsvDatasetSource::from_path(path),
        None => CsvDatasetSource::stdin(),
    };

    info!("Loading {}...", source.describe());
    let table = source.load()?;
    info!("Loaded {} rows. Columns: {:?}", table.len(), table.columns);

    let columns = ColumnMap::resolve(&table.columns)?;
    let exercises = exercises_from_table(&table, &columns);
    if exercises.is_empty() {
        warn!("No exercises found in dataset");
    }

    let to_stdout = args.output == Path::new("-");
    if to_stdout {
        write_exercises(BufWriter::new(stdout().lock()), &exercises, args.compact)?;
        info!("Wrote {} exercises to stdout", exercises.len());
    } else {
        let file = File::create(&args.output)
            .with_context(|| format!("Failed to create output file: {}", args.output.display()))?;
        write_exercises(BufWriter::new(file), &exercises, args.compact)?;

        let shown = std::fs::canonicalize(&args.output).unwrap_or_else(|_| args.output.clone());
        info!("Wrote {} exercises to {}", exercises.len(), shown.display());
    }
    info!("Next: open Exercises in the app, choose Import (CSV or JSON), paste the file contents");

    Ok(())
}
