/// Synthetic leaderboard data
///
/// Produces files in the same shape the CSV loader reads: one header line,
/// then `uid,score,timestamp` rows with CRLF endings.
use super::loader::{CSV_HEADER, MAX_SCORE, MIN_SCORE};
use crate::models::Record;
use chrono::{TimeZone, Utc};
use rand::Rng;
use std::io::{self, Write};

/// Seconds in the timestamp window after [`window_start`].
pub const TIMESTAMP_SPAN_SECS: i64 = 30 * 86_400;

/// 2023-09-15T00:00:00Z
pub fn window_start() -> i64 {
    Utc.with_ymd_and_hms(2023, 9, 15, 0, 0, 0)
        .single()
        .map(|t| t.timestamp())
        .unwrap_or(1_694_736_000)
}

/// Row count for [`generate_records`]; `None` when it does not fit a uid.
pub fn row_count(requested: u64) -> Option<i64> {
    i64::try_from(requested).ok()
}

/// Uids `1..=count`, uniform scores, timestamps uniform over 30 days.
pub fn generate_records<R: Rng>(count: i64, rng: &mut R) -> impl Iterator<Item = Record> + '_ {
    let start = window_start();
    (1..=count).map(move |uid| {
        Record::new(
            uid,
            rng.gen_range(MIN_SCORE..=MAX_SCORE),
            start + rng.gen_range(0..TIMESTAMP_SPAN_SECS),
        )
    })
}

/// Write the header and every record. Returns the number of rows written.
pub fn write_csv<W, I>(mut writer: W, records: I) -> io::Result<u64>
where
    W: Write,
    I: IntoIterator<Item = Record>,
{
    write!(writer, "{CSV_HEADER}\r\n")?;
    let mut rows = 0;
    for record in records {
        write!(
            writer,
            "{},{},{}\r\n",
            record.identity, record.score, record.observed_at
        )?;
        rows += 1;
    }
    writer.flush()?;
    Ok(rows)
}
