pub mod generator;
pub mod loader;
pub mod ranking;

pub use loader::{CsvRecordSource, LoadError, RecordSource};
pub use ranking::{DuplicatePolicy, IndexOptions, RankingError, RankingIndex, TieBreak};
