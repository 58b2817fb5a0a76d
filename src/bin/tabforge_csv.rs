//! tabforge-csv: Re-encode tab-separated text as RFC 4180 CSV
//!
//! Reads TSV from stdin and writes CSV to stdout. Fields containing a comma,
//! double quote or line break are quoted, quotes are doubled, and every line
//! ends with `\n`.
//!
//! Usage:
//!   pbpaste | tabforge-csv > sheet.csv
//!
//!   # Show progress on stderr
//!   RUST_LOG=info tabforge-csv < export.tsv > export.csv

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::Parser;
use log::{debug, info, LevelFilter};
use std::io::{stdin, stdout, BufWriter};
use std::process::ExitCode;
use tabforge::logging::init_logger;
use tabforge::{transcode_tsv, TranscodeError};

/// Exit code for a read or write failure
const EXIT_IO_ERROR: u8 = 1;

#[derive(Parser, Debug)]
#[command(name = "tabforge-csv", version)]
#[command(about = "Read tab-separated lines from stdin and write RFC 4180 CSV to stdout", long_about = None)]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();
    if let Err(e) = init_logger(None, LevelFilter::Warn) {
        eprintln!("Warning: failed to initialize logger: {}", e);
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        // the reader of our output went away; nothing useful to print there
        Err(e) if e.is_broken_pipe() => {
            debug!("Stopping early: {}", e);
            ExitCode::from(EXIT_IO_ERROR)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_IO_ERROR)
        }
    }
}

fn run() -> Result<(), TranscodeError> {
    let reader = stdin().lock();
    let writer = BufWriter::new(stdout().lock());

    let summary = transcode_tsv(reader, writer)?;
    info!(
        "Wrote {} records ({} quoted fields)",
        summary.records, summary.quoted_fields
    );
    Ok(())
}
