use crate::transcode::error::TranscodeError;
use std::io::BufRead;

/// One row of delimited text: an ordered list of fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        Record { fields }
    }

    /// Split one line (terminator already removed) on every tab.
    ///
    /// A line without tabs is a single field, so the empty line is one empty
    /// field rather than an empty record.
    pub fn from_tsv_line(line: &str) -> Self {
        Record {
            fields: line.split('\t').map(str::to_string).collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Record::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Lazily reads tab-separated records, one line at a time
///
/// Tabs are unconditional separators: there is no quoting in the input format.
/// After the first read failure the iterator is exhausted.
pub struct TsvReader<R: BufRead> {
    reader: R,
    buf: String,
    line: u64,
    done: bool,
}

impl<R: BufRead> TsvReader<R> {
    pub fn new(reader: R) -> Self {
        TsvReader {
            reader,
            buf: String::new(),
            line: 0,
            done: false,
        }
    }
}

/// Strip a trailing `\n` or `\r\n`
fn trim_line_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}

impl<R: BufRead> Iterator for TsvReader<R> {
    type Item = Result<Record, TranscodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buf.clear();
        match self.reader.read_line(&mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                self.line += 1;
                Some(Ok(Record::from_tsv_line(trim_line_terminator(&self.buf))))
            }
            Err(source) => {
                self.done = true;
                Some(Err(TranscodeError::Read {
                    line: self.line + 1,
                    source,
                }))
            }
        }
    }
}
