/// Record suppliers
///
/// The ranking index consumes a fully materialized list of records. A
/// [`RecordSource`] produces that list, either from the CSV data file or
/// from memory in tests.
pub mod csv;

pub use self::csv::{CsvRecordSource, CSV_HEADER};

use crate::models::Record;
use std::path::PathBuf;
use thiserror::Error;

/// Inclusive score domain accepted from the data file.
pub const MIN_SCORE: i64 = 0;
pub const MAX_SCORE: i64 = 10_000;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("open {path} error: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed record on line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, LoadError>;

/// Supplies the complete record set in one call. No streaming.
pub trait RecordSource {
    fn load_records(&self) -> Result<Vec<Record>>;
}

impl RecordSource for Vec<Record> {
    fn load_records(&self) -> Result<Vec<Record>> {
        Ok(self.clone())
    }
}
