//! Trace Reader.
//!
//! Each trace line describes one access: a kind marker (`r` or `w`) in the first
//! column followed by a hexadecimal address, e.g. `r 0x7ffd3a40`. The `0x` radix
//! prefix is optional. A line whose first character is not a kind marker, or
//! whose address does not parse as a 64-bit hexadecimal value, is an error.

use std::io::BufRead;

use crate::common::constants::{HEX_PREFIX, READ_MARKER, WRITE_MARKER};
use crate::common::data::{AccessRecord, AccessType};
use crate::common::error::TraceError;

/// Decodes a single trace line.
///
/// # Arguments
///
/// * `line` - Line text without its terminating newline.
/// * `line_number` - 1-based position of the line, used in error messages.
pub fn parse_line(line: &str, line_number: u64) -> Result<AccessRecord, TraceError> {
    let line = line.trim_end_matches('\r');
    let mut chars = line.chars();
    let kind = match chars.next() {
        Some(READ_MARKER) => AccessType::Read,
        Some(WRITE_MARKER) => AccessType::Write,
        _ => {
            return Err(TraceError::UnknownKind {
                line_number,
                line: line.to_string(),
            });
        }
    };

    let field = chars.as_str().trim();
    let digits = field
        .strip_prefix(HEX_PREFIX)
        .or_else(|| field.strip_prefix("0X"))
        .unwrap_or(field);
    let address = u64::from_str_radix(digits, 16).map_err(|_| TraceError::InvalidAddress {
        line_number,
        text: field.to_string(),
    })?;

    Ok(AccessRecord { kind, address })
}

/// Iterator over the access records of a buffered trace.
///
/// Yields `Err` for an undecodable line or a read failure; callers decide
/// whether to stop. Iteration ends at end of input.
#[derive(Debug)]
pub struct TraceReader<R> {
    reader: R,
    buf: String,
    line_number: u64,
}

impl<R: BufRead> TraceReader<R> {
    /// Wraps a buffered reader.
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            line_number: 0,
        }
    }

    /// Number of lines consumed so far.
    pub const fn line_number(&self) -> u64 {
        self.line_number
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<AccessRecord, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_line(&mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line_number += 1;
                let line = self.buf.strip_suffix('\n').unwrap_or(&self.buf);
                Some(parse_line(line, self.line_number))
            }
            Err(e) => Some(Err(TraceError::Io(e))),
        }
    }
}
