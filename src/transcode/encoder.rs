//! RFC 4180 field and record encoding
//!
//! Minimal quoting: a field is quoted only when it contains a comma, a double
//! quote, a carriage return or a line feed. Records end with a bare `\n`.

use crate::transcode::record::Record;
use std::borrow::Cow;
use std::convert::Infallible;
use std::io::{self, Write};

pub const DELIMITER: &str = ",";
pub const QUOTE: char = '"';
pub const TERMINATOR: &str = "\n";

/// Whether `field` has to be wrapped in quotes
#[inline]
pub fn needs_quoting(field: &str) -> bool {
    field
        .bytes()
        .any(|b| matches!(b, b',' | b'"' | b'\r' | b'\n'))
}

/// Encode a single field. Borrows when no quoting is needed.
pub fn encode_field(field: &str) -> Cow<'_, str> {
    if !needs_quoting(field) {
        return Cow::Borrowed(field);
    }

    let quotes = field.matches(QUOTE).count();
    let mut out = String::with_capacity(field.len() + quotes + 2);
    out.push(QUOTE);
    for ch in field.chars() {
        if ch == QUOTE {
            out.push(QUOTE);
        }
        out.push(ch);
    }
    out.push(QUOTE);
    Cow::Owned(out)
}

/// Emit the pieces of one encoded line in order: fields, the delimiters
/// between them, then the terminator. Returns how many fields were quoted.
fn emit_record<E>(
    record: &Record,
    mut emit: impl FnMut(&str) -> Result<(), E>,
) -> Result<usize, E> {
    let mut quoted = 0;
    for (i, field) in record.fields().iter().enumerate() {
        if i > 0 {
            emit(DELIMITER)?;
        }
        let encoded = encode_field(field);
        if let Cow::Owned(_) = encoded {
            quoted += 1;
        }
        emit(&encoded)?;
    }
    emit(TERMINATOR)?;
    Ok(quoted)
}

/// Encode a record as one output line, terminator included
pub fn encode_record(record: &Record) -> String {
    let mut line = String::new();
    let pushed = emit_record(record, |piece| {
        line.push_str(piece);
        Ok::<(), Infallible>(())
    });
    match pushed {
        Ok(_) => line,
        Err(never) => match never {},
    }
}

/// Stream the encoding of `record` into `out`.
///
/// Produces exactly the bytes of [`encode_record`]. Returns how many fields
/// were quoted.
pub fn write_record<W: Write + ?Sized>(out: &mut W, record: &Record) -> io::Result<usize> {
    emit_record(record, |piece| out.write_all(piece.as_bytes()))
}
