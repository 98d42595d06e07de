//! CSV encoding and decoding of the whole table.
//!
//! The persisted format is plain comma-separated values:
//!
//! - one line per table row, fields in column order, no header row;
//! - a field containing `,` or `"` is wrapped in double quotes and every
//!   embedded `"` is doubled; any other field is written as-is;
//! - every row ends with `\n`, including the last one.
//!
//! [`decode`] accepts exactly what [`encode`] produces, so a saved table loads
//! back unchanged.
//!
//! ```rust
//! use cellgrid::codec;
//!
//! let records = codec::decode("x,y\n\"1,2\",z\n ,\n").unwrap();
//! assert_eq!(records[1], vec!["1,2".to_string(), "z".to_string()]);
//! assert_eq!(records[2], vec![" ".to_string(), String::new()]);
//! ```

use crate::error::{GridError, Result};
use crate::grid::Table;
use std::fs;
use std::path::Path;

const DELIMITER: char = ',';
const QUOTE: char = '"';
const TERMINATOR: char = '\n';

/// Encodes every cell of `table`, row by row.
pub fn encode(table: &Table) -> Vec<u8> {
    let mut out = String::new();
    for row in table.rows() {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.push(DELIMITER);
            }
            encode_field(cell.text(), &mut out);
        }
        out.push(TERMINATOR);
    }
    out.into_bytes()
}

/// Appends one field to `out`, quoting only when required.
pub fn encode_field(text: &str, out: &mut String) {
    if !needs_quoting(text) {
        out.push_str(text);
        return;
    }
    out.push(QUOTE);
    for ch in text.chars() {
        if ch == QUOTE {
            out.push(QUOTE);
        }
        out.push(ch);
    }
    out.push(QUOTE);
}

fn needs_quoting(text: &str) -> bool {
    text.contains([DELIMITER, QUOTE])
}

/// Writes the encoded table to `path`, replacing any existing file.
///
/// # Errors
///
/// [`GridError::Io`] when the file cannot be created or written. The table is
/// never modified.
pub fn save(table: &Table, path: &Path) -> Result<()> {
    let bytes = encode(table);
    fs::write(path, &bytes).map_err(|e| GridError::io(path, e))?;
    tracing::info!(
        path = %path.display(),
        rows = table.row_count(),
        cols = table.col_count(),
        bytes = bytes.len(),
        "table saved"
    );
    Ok(())
}

/// Parses CSV text into records of fields.
///
/// Each `\n`-terminated line is one record; an empty line is a record with a
/// single empty field. A missing newline after the last record is tolerated,
/// and a `\r` before a newline is dropped.
///
/// # Errors
///
/// [`GridError::Parse`] for an unterminated quoted field or a character other
/// than a delimiter or line end right after a closing quote.
pub fn decode(text: &str) -> Result<Vec<Vec<String>>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut state = State::FieldStart;
    let mut line = 1;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match state {
            State::FieldStart | State::Unquoted => match ch {
                DELIMITER => {
                    record.push(std::mem::take(&mut field));
                    state = State::FieldStart;
                }
                TERMINATOR => {
                    end_record(&mut records, &mut record, &mut field);
                    state = State::FieldStart;
                    line += 1;
                }
                '\r' if chars.peek() == Some(&TERMINATOR) => {}
                QUOTE if state == State::FieldStart => state = State::Quoted,
                _ => {
                    field.push(ch);
                    state = State::Unquoted;
                }
            },
            State::Quoted => match ch {
                QUOTE if chars.peek() == Some(&QUOTE) => {
                    chars.next();
                    field.push(QUOTE);
                }
                QUOTE => state = State::QuoteClosed,
                _ => {
                    if ch == TERMINATOR {
                        line += 1;
                    }
                    field.push(ch);
                }
            },
            State::QuoteClosed => match ch {
                DELIMITER => {
                    record.push(std::mem::take(&mut field));
                    state = State::FieldStart;
                }
                TERMINATOR => {
                    end_record(&mut records, &mut record, &mut field);
                    state = State::FieldStart;
                    line += 1;
                }
                '\r' if chars.peek() == Some(&TERMINATOR) => {}
                other => {
                    return Err(GridError::Parse {
                        line,
                        message: format!("unexpected {other:?} after closing quote"),
                    })
                }
            },
        }
    }

    match state {
        State::Quoted => Err(GridError::Parse {
            line,
            message: "unterminated quoted field".to_string(),
        }),
        // Input ended right after a terminator: nothing pending.
        State::FieldStart if record.is_empty() => Ok(records),
        _ => {
            end_record(&mut records, &mut record, &mut field);
            Ok(records)
        }
    }
}

/// Reads and decodes a CSV file.
pub fn load(path: &Path) -> Result<Vec<Vec<String>>> {
    let text = fs::read_to_string(path).map_err(|e| GridError::io(path, e))?;
    let records = decode(&text)?;
    tracing::info!(path = %path.display(), records = records.len(), "table loaded");
    Ok(records)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteClosed,
}

fn end_record(records: &mut Vec<Vec<String>>, record: &mut Vec<String>, field: &mut String) {
    record.push(std::mem::take(field));
    records.push(std::mem::take(record));
}
