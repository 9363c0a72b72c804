//! Line codec
//!
//! Encoding and decoding of a single delimited record line.

use std::str::FromStr;

use crate::error::{Result, TallyError};

use super::Record;

/// Delimiter every record line is split on
pub const FIELD_DELIMITER: char = ',';

// =============================================================================
// Decoding
// =============================================================================

/// Split a line into trimmed fields
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_DELIMITER).map(str::trim).collect()
}

/// Decode one line into a record
///
/// `line_no` is 1-based and only used for error reporting. Extra fields past
/// `R::ARITY` are ignored.
pub fn decode_line<R: Record>(line: &str, line_no: usize) -> Result<R> {
    let fields = split_fields(line);

    if fields.len() < R::ARITY {
        return Err(TallyError::parse(
            line_no,
            format!("expected {} fields, found {}", R::ARITY, fields.len()),
        ));
    }

    R::from_fields(&fields).map_err(|e| match e {
        TallyError::Parse { reason, .. } => TallyError::parse(line_no, reason),
        other => TallyError::parse(line_no, other.to_string()),
    })
}

/// Parse a numeric field, naming the field on failure
pub fn parse_number<T: FromStr>(field: &str, name: &str) -> Result<T> {
    field
        .parse()
        .map_err(|_| TallyError::InvalidInput(format!("{} is not a number: {:?}", name, field)))
}

/// Parse a boolean flag: `true` in any case is true, anything else is false
pub fn parse_flag(field: &str) -> bool {
    field.eq_ignore_ascii_case("true")
}

// =============================================================================
// Encoding
// =============================================================================

/// Encode a record as one line (no trailing newline)
pub fn encode_record<R: Record>(record: &R) -> String {
    record.to_fields().join(R::SEPARATOR)
}
