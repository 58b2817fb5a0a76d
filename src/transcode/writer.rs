use crate::transcode::encoder::write_record;
use crate::transcode::error::TranscodeError;
use crate::transcode::record::Record;
use std::io::Write;

/// Counters reported after a transcode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranscodeSummary {
    /// Records written
    pub records: u64,
    /// Fields that had to be quoted
    pub quoted_fields: u64,
}

/// Writes encoded CSV lines to a single output
pub struct CsvLineWriter<W: Write> {
    writer: W,
    summary: TranscodeSummary,
}

impl<W: Write> CsvLineWriter<W> {
    pub fn new(writer: W) -> Self {
        CsvLineWriter {
            writer,
            summary: TranscodeSummary::default(),
        }
    }

    pub fn write_record(&mut self, record: &Record) -> Result<(), TranscodeError> {
        let quoted = write_record(&mut self.writer, record)
            .map_err(|source| TranscodeError::Write { source })?;
        self.summary.records += 1;
        self.summary.quoted_fields += quoted as u64;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), TranscodeError> {
        self.writer
            .flush()
            .map_err(|source| TranscodeError::Write { source })
    }

    pub fn summary(&self) -> TranscodeSummary {
        self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_line_writer_counts() {
        let mut buffer = Vec::new();
        let mut writer = CsvLineWriter::new(&mut buffer);
        writer
            .write_record(&["a", "b,c"].into_iter().collect())
            .unwrap();
        writer.write_record(&["plain"].into_iter().collect()).unwrap();
        writer.flush().unwrap();

        assert_eq!(
            writer.summary(),
            TranscodeSummary {
                records: 2,
                quoted_fields: 1
            }
        );
        drop(writer);
        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "a,\"b,c\"\nplain\n");
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_surfaces() {
        let mut writer = CsvLineWriter::new(ClosedPipe);
        let err = writer
            .write_record(&["x"].into_iter().collect())
            .unwrap_err();
        assert!(err.is_broken_pipe());
        assert_eq!(writer.summary().records, 0);
    }
}
