use super::{DuplicatePolicy, IndexOptions, RankingError, Result, TieBreak};
use crate::models::{RankedEntry, Record};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Number of neighbours returned on each side of the queried rank.
pub const DEFAULT_WINDOW_RADIUS: usize = 10;

/// Immutable leaderboard ordering with O(1) identity lookup.
///
/// Built once, then shared read-only between request handlers. Nothing
/// mutates it after construction, so readers need no locking.
#[derive(Debug, Default)]
pub struct RankingIndex {
    ordered: Vec<Record>,
    rank_of: HashMap<i64, usize>,
}

impl RankingIndex {
    /// Build with default options: duplicates last-wins, ties keep input order.
    pub fn new(records: Vec<Record>) -> Self {
        Self::from_ordered(sort_records(records, TieBreak::InputOrder))
    }

    /// Build with an explicit duplicate policy and tie-break.
    ///
    /// Only [`DuplicatePolicy::Reject`] can fail.
    pub fn build(records: Vec<Record>, options: &IndexOptions) -> Result<Self> {
        let records = resolve_duplicates(records, options.duplicate_policy)?;
        Ok(Self::from_ordered(sort_records(records, options.tie_break)))
    }

    fn from_ordered(ordered: Vec<Record>) -> Self {
        let mut rank_of = HashMap::with_capacity(ordered.len());
        for (position, record) in ordered.iter().enumerate() {
            // A repeated identity overwrites its earlier position
            rank_of.insert(record.identity, position);
        }
        Self { ordered, rank_of }
    }

    /// Zero-based position of `identity` (0 = best).
    pub fn resolve_rank(&self, identity: i64) -> Result<usize> {
        self.rank_of
            .get(&identity)
            .copied()
            .ok_or(RankingError::NotFound(identity))
    }

    /// Entries within `radius` positions of `identity`, best rank first.
    ///
    /// The window is clamped to `[0, len - 1]`, so it shrinks near either end
    /// of the board instead of wrapping.
    pub fn neighborhood(&self, identity: i64, radius: usize) -> Result<Vec<RankedEntry>> {
        let position = self.resolve_rank(identity)?;
        let begin = position.saturating_sub(radius);
        // A resolved position implies a non-empty board
        let end = position.saturating_add(radius).min(self.ordered.len() - 1);

        Ok(self.ordered[begin..=end]
            .iter()
            .enumerate()
            .map(|(offset, record)| RankedEntry::from_position(record, begin + offset))
            .collect())
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Number of identities reachable through lookup. Smaller than `len()`
    /// only when duplicates were kept under [`DuplicatePolicy::LastWins`].
    pub fn distinct_identities(&self) -> usize {
        self.rank_of.len()
    }

    pub fn entries(&self) -> &[Record] {
        &self.ordered
    }

    pub fn record_at(&self, position: usize) -> Option<&Record> {
        self.ordered.get(position)
    }
}

/// `Less` means `a` ranks before `b`.
fn rank_order(a: &Record, b: &Record, tie_break: TieBreak) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.observed_at.cmp(&b.observed_at))
        .then_with(|| match tie_break {
            TieBreak::InputOrder => Ordering::Equal,
            TieBreak::IdentityAscending => a.identity.cmp(&b.identity),
        })
}

fn sort_records(mut records: Vec<Record>, tie_break: TieBreak) -> Vec<Record> {
    // Stable, so full ties keep input order
    records.sort_by(|a, b| rank_order(a, b, tie_break));
    records
}

fn resolve_duplicates(records: Vec<Record>, policy: DuplicatePolicy) -> Result<Vec<Record>> {
    match policy {
        DuplicatePolicy::LastWins => Ok(records),
        DuplicatePolicy::Reject => {
            let mut seen = HashSet::with_capacity(records.len());
            for record in &records {
                if !seen.insert(record.identity) {
                    return Err(RankingError::DuplicateIdentity(record.identity));
                }
            }
            Ok(records)
        }
        DuplicatePolicy::KeepBest => Ok(keep_one_per_identity(records, |candidate, kept| {
            rank_order(candidate, kept, TieBreak::InputOrder) == Ordering::Less
        })),
        DuplicatePolicy::KeepLatest => Ok(keep_one_per_identity(records, |candidate, kept| {
            candidate.observed_at >= kept.observed_at
        })),
    }
}

/// Keeps the first occurrence's slot, swapping in later records when
/// `replaces(candidate, kept)` holds.
fn keep_one_per_identity<F>(records: Vec<Record>, replaces: F) -> Vec<Record>
where
    F: Fn(&Record, &Record) -> bool,
{
    let mut slot_of: HashMap<i64, usize> = HashMap::with_capacity(records.len());
    let mut kept: Vec<Record> = Vec::with_capacity(records.len());

    for record in records {
        match slot_of.get(&record.identity) {
            Some(&slot) => {
                if replaces(&record, &kept[slot]) {
                    kept[slot] = record;
                }
            }
            None => {
                slot_of.insert(record.identity, kept.len());
                kept.push(record);
            }
        }
    }

    kept
}
