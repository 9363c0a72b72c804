//! Store Module
//!
//! Generic flat-file record store shared by the library and the bank.
//!
//! ## Responsibilities
//! - Hydrate an in-memory list of records from a delimited text file
//! - Case-insensitive lookup by identity key
//! - Case-insensitive substring filtering over any field
//! - Full rewrite of the backing file after each mutation
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ field_1 <sep> field_2 <sep> ... <sep> field_n │  record 1
//! ├──────────────────────────────────────────────┤
//! │ field_1 <sep> field_2 <sep> ... <sep> field_n │  record 2
//! └──────────────────────────────────────────────┘
//! ```
//! Fields are split on `,` and trimmed when read. The separator written back
//! is chosen per record type (`", "` or `","`). There is no header and no
//! escaping, so a delimiter inside a value shifts the remaining fields.

mod codec;
mod record_store;

use std::borrow::Cow;

use crate::error::Result;

pub use codec::{decode_line, encode_record, parse_flag, parse_number, split_fields, FIELD_DELIMITER};
pub use record_store::RecordStore;

/// A record that can live in a [`RecordStore`]
pub trait Record: Sized {
    /// Minimum number of fields a line must carry
    const ARITY: usize;

    /// Separator placed between fields when writing
    const SEPARATOR: &'static str;

    /// Build a record from trimmed fields (at least `ARITY` of them)
    fn from_fields(fields: &[&str]) -> Result<Self>;

    /// Fields in file order
    fn to_fields(&self) -> Vec<String>;

    /// Identity key used for lookups
    fn key(&self) -> Cow<'_, str>;
}

/// Outcome of hydrating a store from disk
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Whether the backing file existed
    pub file_found: bool,

    /// Number of records successfully decoded
    pub records_loaded: usize,

    /// 1-based line on which loading stopped, if it stopped early
    pub stopped_at_line: Option<usize>,

    /// Why loading stopped early
    pub error: Option<String>,
}

impl LoadReport {
    /// True if every line of an existing file was read
    pub fn is_complete(&self) -> bool {
        self.stopped_at_line.is_none() && self.error.is_none()
    }
}
