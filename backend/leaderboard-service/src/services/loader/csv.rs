use super::{LoadError, RecordSource, Result, MAX_SCORE, MIN_SCORE};
use crate::models::Record;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

/// Column header written on the first line of every data file.
pub const CSV_HEADER: &str = "UID,Score,Timestamp";

/// Loads records from a `UID,Score,Timestamp` file with CRLF line endings.
///
/// The first line is always skipped as a header. Any unparsable line fails
/// the whole load.
#[derive(Debug, Clone)]
pub struct CsvRecordSource {
    path: PathBuf,
}

impl CsvRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for CsvRecordSource {
    fn load_records(&self) -> Result<Vec<Record>> {
        let file = File::open(&self.path).map_err(|source| LoadError::Open {
            path: self.path.clone(),
            source,
        })?;

        let records = parse_records(BufReader::new(file))?;
        tracing::debug!(
            path = %self.path().display(),
            records = records.len(),
            "Loaded leaderboard records"
        );
        Ok(records)
    }
}

/// Parse every line after the header. Accepts CRLF or LF; empty lines are ignored.
pub fn parse_records<R: BufRead>(reader: R) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    // `lines()` strips both "\n" and "\r\n"
    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line = line.map_err(|e| match e.kind() {
            ErrorKind::InvalidData => LoadError::MalformedInput {
                line: idx + 1,
                reason: e.to_string(),
            },
            _ => LoadError::Io(e),
        })?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_line(&line, idx + 1)?);
    }

    Ok(records)
}

fn parse_line(line: &str, line_no: usize) -> Result<Record> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 3 {
        return Err(LoadError::MalformedInput {
            line: line_no,
            reason: format!("expected 3 fields, found {}", fields.len()),
        });
    }

    let parse = |name: &str, raw: &str| -> Result<i64> {
        raw.trim()
            .parse::<i64>()
            .map_err(|e| LoadError::MalformedInput {
                line: line_no,
                reason: format!("invalid {name} {raw:?}: {e}"),
            })
    };

    let record = Record::new(
        parse("UID", fields[0])?,
        parse("Score", fields[1])?,
        parse("Timestamp", fields[2])?,
    );

    if !(MIN_SCORE..=MAX_SCORE).contains(&record.score) {
        return Err(LoadError::MalformedInput {
            line: line_no,
            reason: format!(
                "score {} outside [{}, {}]",
                record.score, MIN_SCORE, MAX_SCORE
            ),
        });
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    fn parse(input: &str) -> Result<Vec<Record>> {
        parse_records(Cursor::new(input.as_bytes()))
    }

    #[test]
    fn test_skips_header_and_reads_crlf_rows() {
        let records = parse("UID,Score,Timestamp\r\n1,50,100\r\n2,80,200\r\n").unwrap();

        assert_eq!(
            records,
            vec![Record::new(1, 50, 100), Record::new(2, 80, 200)]
        );
    }

    #[test]
    fn test_accepts_lf_and_missing_final_terminator() {
        let records = parse("UID,Score,Timestamp\n1,50,100\n2,80,200").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], Record::new(2, 80, 200));
    }

    #[test]
    fn test_ignores_trailing_empty_lines() {
        let records = parse("UID,Score,Timestamp\r\n1,50,100\r\n\r\n\r\n").unwrap();
        assert_eq!(records, vec![Record::new(1, 50, 100)]);
    }

    #[test]
    fn test_header_only_and_empty_input() {
        assert!(parse("UID,Score,Timestamp\r\n").unwrap().is_empty());
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let err = parse("UID,Score,Timestamp\r\n1,50,100\r\n2,abc,200\r\n").unwrap_err();

        match err {
            LoadError::MalformedInput { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("Score"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_row_reports_line_number() {
        let mut input = b"UID,Score,Timestamp\r\n1,50,100\r\n".to_vec();
        input.extend_from_slice(b"2,8\xff0,200\r\n");

        let err = parse_records(Cursor::new(input)).unwrap_err();
        assert!(matches!(err, LoadError::MalformedInput { line: 3, .. }));
    }

    #[test]
    fn test_wrong_field_count() {
        let err = parse("UID,Score,Timestamp\r\n1,50\r\n").unwrap_err();
        assert!(matches!(err, LoadError::MalformedInput { line: 2, .. }));
    }

    #[test]
    fn test_score_out_of_range() {
        let err = parse("UID,Score,Timestamp\r\n1,10001,100\r\n").unwrap_err();
        assert!(matches!(err, LoadError::MalformedInput { line: 2, .. }));

        let err = parse("UID,Score,Timestamp\r\n1,-1,100\r\n").unwrap_err();
        assert!(matches!(err, LoadError::MalformedInput { line: 2, .. }));
    }

    #[test]
    fn test_loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{CSV_HEADER}\r\n10,0,1694707200\r\n11,10000,1694707201\r\n").unwrap();

        let source = CsvRecordSource::new(file.path());
        assert_eq!(source.path(), file.path());
        let records = source.load_records().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].score, 10_000);
    }

    #[test]
    fn test_missing_file() {
        let source = CsvRecordSource::new("/nonexistent/leaderboard.csv");
        assert!(matches!(
            source.load_records(),
            Err(LoadError::Open { .. })
        ));
    }
}
