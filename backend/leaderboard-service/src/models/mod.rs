use serde::{Deserialize, Serialize};

/// One participant's score and the second it was achieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub identity: i64,
    pub score: i64,
    /// Unix timestamp in seconds
    pub observed_at: i64,
}

impl Record {
    pub fn new(identity: i64, score: i64, observed_at: i64) -> Self {
        Self {
            identity,
            score,
            observed_at,
        }
    }
}

/// A record annotated with its 1-based display rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub identity: i64,
    pub score: i64,
    pub observed_at: i64,
    pub display_rank: usize,
}

impl RankedEntry {
    pub fn from_position(record: &Record, position: usize) -> Self {
        Self {
            identity: record.identity,
            score: record.score,
            observed_at: record.observed_at,
            display_rank: position + 1,
        }
    }
}

// Wire format

#[derive(Debug, Deserialize)]
pub struct UidQuery {
    pub uid: i64,
}

/// Envelope shared by every successful lookup response.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResponse<T> {
    #[serde(rename = "Code")]
    pub code: i64,
    #[serde(rename = "Msg")]
    pub msg: String,
    #[serde(rename = "Data")]
    pub data: T,
}

impl<T> LookupResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: 0,
            msg: "OK".to_string(),
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NearbyRankItem {
    #[serde(rename = "UID")]
    pub uid: i64,
    #[serde(rename = "Score")]
    pub score: i64,
    #[serde(rename = "Timestamp")]
    pub timestamp: i64,
    #[serde(rename = "Rank")]
    pub rank: i64,
}

impl From<RankedEntry> for NearbyRankItem {
    fn from(entry: RankedEntry) -> Self {
        Self {
            uid: entry.identity,
            score: entry.score,
            timestamp: entry.observed_at,
            rank: entry.display_rank as i64,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankItem {
    #[serde(rename = "UID")]
    pub uid: i64,
    /// 1-based display rank
    #[serde(rename = "Rank")]
    pub rank: i64,
    /// 0-based position in the ordering
    #[serde(rename = "Position")]
    pub position: i64,
}
