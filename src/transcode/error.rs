use thiserror::Error;

/// Failure of a TSV to CSV transcode.
///
/// The encoder itself never fails, so every variant comes from one of the two
/// streams. Partial output already written is left as is.
#[derive(Error, Debug)]
pub enum TranscodeError {
    /// The input stream failed (or was not valid UTF-8) while reading `line`.
    #[error("failed to read input at line {line}: {source}")]
    Read {
        line: u64,
        #[source]
        source: std::io::Error,
    },

    /// The output stream rejected a write or flush, e.g. a closed pipe.
    #[error("failed to write output: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },
}

impl TranscodeError {
    /// True when the downstream reader went away (`EPIPE`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(
            self,
            TranscodeError::Write { source } if source.kind() == std::io::ErrorKind::BrokenPipe
        )
    }
}
