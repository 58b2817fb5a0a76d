//! # Tabforge - Tabular Data Toolkit
//!
//! Small utilities for moving tabular data between formats.
//!
//! ## Modules
//!
//! - **transcode**: Re-encode tab-separated text as RFC 4180 CSV
//! - **exercises**: Export a gym exercise dataset as an importable JSON array
//!
//! ## Quick Start
//!
//! ### TSV to CSV
//!
//! ```rust
//! use tabforge::transcode_tsv;
//!
//! # fn main() -> Result<(), tabforge::TranscodeError> {
//! let input = "hello\tworld, comma\tplain\n";
//! let mut output = Vec::new();
//!
//! let summary = transcode_tsv(input.as_bytes(), &mut output)?;
//!
//! assert_eq!(output, b"hello,\"world, comma\",plain\n");
//! assert_eq!(summary.records, 1);
//! # Ok(())
//! # }
//! ```
//!
//! ### Exercise export
//!
//! ```rust
//! use tabforge::exercises::{exercises_from_table, ColumnMap, Table};
//!
//! # fn main() -> anyhow::Result<()> {
//! let table = Table::from_csv_reader("Title,Type\nRowing,Cardio\n".as_bytes())?;
//! let columns = ColumnMap::resolve(&table.columns)?;
//! let exercises = exercises_from_table(&table, &columns);
//!
//! assert_eq!(exercises[0].name, "Rowing");
//! # Ok(())
//! # }
//! ```

use std::io::{BufRead, Write};

pub mod exercises;
pub mod logging;
pub mod transcode;

// Re-export commonly used types for convenience
pub use exercises::{ColumnMap, CsvDatasetSource, DatasetSource, Exercise, ExerciseType, Table};
pub use transcode::{
    encode_field, encode_record, CsvLineWriter, Record, TranscodeError, TranscodeSummary, TsvReader,
};

/// Main entry point: stream TSV from `reader` to CSV on `writer`
///
/// Records are handled one at a time in input order. The first read or write
/// failure stops the transcode; output already written stays written.
pub fn transcode_tsv<R: BufRead, W: Write>(
    reader: R,
    writer: W,
) -> Result<TranscodeSummary, TranscodeError> {
    let mut writer = CsvLineWriter::new(writer);

    for record in TsvReader::new(reader) {
        writer.write_record(&record?)?;
    }

    writer.flush()?;
    Ok(writer.summary())
}
