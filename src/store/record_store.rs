//! Record Store
//!
//! In-memory list of records backed by a flat file.
//!
//! ## Responsibilities
//! - Load all parseable records on open
//! - Keep insertion order (which is also file order)
//! - Rewrite the whole file on save

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::{codec, LoadReport, Record};

/// Flat-file backed collection of records
///
/// ## Persistence:
/// - `open` never fails: a missing or unreadable file gives an empty store
/// - A malformed line stops the load; records before it are kept
/// - `save` truncates and rewrites the file in place (no atomic rename)
#[derive(Debug)]
pub struct RecordStore<R: Record> {
    /// Backing file
    path: PathBuf,

    /// Records in file order
    records: Vec<R>,

    /// What happened when the store was hydrated
    load_report: LoadReport,
}

impl<R: Record> RecordStore<R> {
    /// Open a store, hydrating it from `path`
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (records, load_report) = Self::load(&path);

        Self {
            path,
            records,
            load_report,
        }
    }

    /// Read every record from `path`
    ///
    /// Stops at the first line that fails to decode and returns what was
    /// accumulated before it. Blank lines are skipped.
    pub fn load(path: &Path) -> (Vec<R>, LoadReport) {
        let mut records = Vec::new();
        let mut report = LoadReport::default();

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No record file at {}, starting empty", path.display());
                return (records, report);
            }
            Err(e) => {
                tracing::warn!("Error reading {}: {}", path.display(), e);
                report.error = Some(e.to_string());
                return (records, report);
            }
        };
        report.file_found = true;

        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line_no = idx + 1;

            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!("Error reading {} at line {}: {}", path.display(), line_no, e);
                    report.stopped_at_line = Some(line_no);
                    report.error = Some(e.to_string());
                    break;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            match codec::decode_line::<R>(&line, line_no) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(
                        "Stopped loading {} ({} records kept): {}",
                        path.display(),
                        records.len(),
                        e
                    );
                    report.stopped_at_line = Some(line_no);
                    report.error = Some(e.to_string());
                    break;
                }
            }
        }

        report.records_loaded = records.len();
        tracing::debug!("Loaded {} records from {}", records.len(), path.display());

        (records, report)
    }

    /// Rewrite the backing file with every record
    pub fn save(&self) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);

        for record in &self.records {
            writeln!(writer, "{}", codec::encode_record(record))?;
        }
        writer.flush()?;

        tracing::debug!("Saved {} records to {}", self.records.len(), self.path.display());
        Ok(())
    }

    /// Append a record (in memory only; call `save` to persist)
    pub fn push(&mut self, record: R) {
        self.records.push(record);
    }

    /// First record whose key equals `key`, ignoring case
    pub fn find_by_key(&self, key: &str) -> Option<&R> {
        let wanted = key.to_lowercase();
        self.records
            .iter()
            .find(|record| record.key().to_lowercase() == wanted)
    }

    /// Mutable variant of [`find_by_key`](Self::find_by_key)
    pub fn find_by_key_mut(&mut self, key: &str) -> Option<&mut R> {
        let wanted = key.to_lowercase();
        self.records
            .iter_mut()
            .find(|record| record.key().to_lowercase() == wanted)
    }

    /// All records whose selected field contains `needle`, ignoring case
    pub fn filter<F>(&self, field: F, needle: &str) -> Vec<&R>
    where
        F: Fn(&R) -> &str,
    {
        let needle = needle.to_lowercase();
        self.records
            .iter()
            .filter(|record| field(*record).to_lowercase().contains(&needle))
            .collect()
    }

    /// Iterate over records in file order
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    /// Mutable iteration in file order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, R> {
        self.records.iter_mut()
    }

    /// All records as a slice
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Report from the initial load
    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }
}
