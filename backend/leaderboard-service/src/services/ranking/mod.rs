/// Ranking Module
///
/// Builds the leaderboard ordering once at startup and answers read-only
/// lookups against it.
///
/// # Ordering
/// - Higher score ranks first
/// - Equal scores: earlier `observed_at` ranks first
/// - Full ties: input order, or identity ascending with [`TieBreak::IdentityAscending`]
///
/// # Workflow
/// 1. Resolve duplicate identities per [`DuplicatePolicy`]
/// 2. Sort records by the ordering above
/// 3. Scan once, mapping identity → position
pub mod index;

pub use index::{RankingIndex, DEFAULT_WINDOW_RADIUS};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankingError {
    #[error("uid not found: {0}")]
    NotFound(i64),

    #[error("duplicate uid in source data: {0}")]
    DuplicateIdentity(i64),
}

pub type Result<T> = std::result::Result<T, RankingError>;

/// What to do when the same identity appears more than once in the source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep every record; the lookup map points at the worse-ranked one
    #[default]
    LastWins,
    /// Keep only the best-ranked record per identity
    KeepBest,
    /// Keep only the most recently observed record per identity
    KeepLatest,
    /// Fail the build
    Reject,
}

/// Final key for records with equal score and timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    #[default]
    InputOrder,
    IdentityAscending,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexOptions {
    pub duplicate_policy: DuplicatePolicy,
    pub tie_break: TieBreak,
}
