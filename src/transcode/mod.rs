//! TSV to CSV transcoding
//!
//! Reads tab-separated records one line at a time and re-emits them as
//! RFC 4180 CSV with minimal quoting and `\n` line endings. Nothing is kept
//! between records, so memory use is bounded by the longest line.

pub mod encoder;
pub mod error;
pub mod record;
pub mod writer;

pub use encoder::{encode_field, encode_record, needs_quoting, write_record};
pub use error::TranscodeError;
pub use record::{Record, TsvReader};
pub use writer::{CsvLineWriter, TranscodeSummary};
