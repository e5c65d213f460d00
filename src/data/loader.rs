use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::classify::classify;
use super::model::{PointSets, Record};

/// Zero-based token positions of the fields that are actually parsed.
const X_COLUMN: usize = 0;
const Y_COLUMN: usize = 1;
const FLAG_COLUMN: usize = 3;
const MIN_TOKENS: usize = 4;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a data file could not be turned into [`PointSets`].
///
/// Line numbers are 1-based; column numbers are 1-based token positions.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: read failed")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected at least 4 fields, found {found}")]
    MissingFields { line: usize, found: usize },

    #[error("line {line}, column {column}: '{token}' is not a number")]
    InvalidNumber {
        line: usize,
        column: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load and classify a whitespace-separated data file.
///
/// Expected layout, one record per line, no header:
///
/// ```text
/// <x> <y> <unused> <flag>
/// -12.3400 518.2100 -130.9000 0.0000
/// ```
///
/// The first malformed line aborts loading; no partial result is returned.
pub fn load_file(path: &Path) -> Result<PointSets, LoadError> {
    log::debug!("Opening {}", path.display());
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(BufReader::new(file))
}

/// Load and classify records from any buffered reader.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Bytes that are not valid
/// UTF-8 are a read failure on the line they occur in.
pub fn load_reader<R: BufRead>(mut reader: R) -> Result<PointSets, LoadError> {
    let mut records = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| LoadError::Read {
                line: line_no + 1,
                source,
            })?;
        if read == 0 {
            break;
        }

        let chunk = std::str::from_utf8(&buf).map_err(|e| LoadError::Read {
            line: line_no + 1,
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })?;
        for line in split_lines(chunk) {
            line_no += 1;
            records.push(parse_record(line, line_no)?);
        }
    }

    let sets = classify(&records);
    log::debug!(
        "Parsed {} records ({} up, {} down)",
        records.len(),
        sets.up.len(),
        sets.down.len()
    );
    Ok(sets)
}

/// Break one `\n`-terminated chunk into lines, also splitting on bare `\r`.
fn split_lines(chunk: &str) -> std::str::Split<'_, char> {
    let chunk = chunk.strip_suffix('\n').unwrap_or(chunk);
    let chunk = chunk.strip_suffix('\r').unwrap_or(chunk);
    chunk.split('\r')
}

/// Parse one input line into a [`Record`].
///
/// Tokens beyond the fourth are ignored, and the third token is never
/// inspected, so it may hold anything.
pub fn parse_record(line: &str, line_no: usize) -> Result<Record, LoadError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < MIN_TOKENS {
        return Err(LoadError::MissingFields {
            line: line_no,
            found: tokens.len(),
        });
    }

    Ok(Record {
        x: parse_token(&tokens, X_COLUMN, line_no)?,
        y: parse_token(&tokens, Y_COLUMN, line_no)?,
        flag: parse_token(&tokens, FLAG_COLUMN, line_no)?,
    })
}

fn parse_token(tokens: &[&str], column: usize, line_no: usize) -> Result<f64, LoadError> {
    let tok = tokens[column];
    tok.parse::<f64>().map_err(|source| LoadError::InvalidNumber {
        line: line_no,
        column: column + 1,
        token: tok.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::data::model::Point;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
    }

    fn load_str(text: &str) -> Result<PointSets, LoadError> {
        load_reader(Cursor::new(text))
    }

    #[test]
    fn mixed_flags_scenario() {
        let sets = load_str("1.0 2.0 0.0 0.0\n3.0 4.0 0.0 0.9\n").unwrap();
        assert_eq!(
            sets.up,
            vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0), Point::new(3.0, 4.0)]
        );
        assert_eq!(sets.down, vec![Point::new(3.0, 4.0)]);
    }

    #[test]
    fn flag_exactly_at_threshold() {
        let sets = load_str("5.0 6.0 0.0 0.5").unwrap();
        assert_eq!(sets.up, vec![Point::new(5.0, 6.0)]);
        assert!(sets.down.is_empty());
    }

    #[test]
    fn empty_input_yields_empty_sets() {
        let sets = load_str("").unwrap();
        assert!(sets.up.is_empty());
        assert!(sets.down.is_empty());
    }

    #[test]
    fn short_line_is_fatal() {
        let err = load_str("1.0 2.0 0.0 1.0\n1.0 2.0\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingFields { line: 2, found: 2 }));
        assert_eq!(err.to_string(), "line 2: expected at least 4 fields, found 2");
    }

    #[test]
    fn blank_line_is_fatal() {
        let err = load_str("1.0 2.0 0.0 1.0\n\n3.0 4.0 0.0 0.0\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingFields { line: 2, found: 0 }));
    }

    #[test]
    fn invalid_utf8_is_a_read_failure() {
        let bytes: &[u8] = b"1.0 2.0 0.0 1.0\n\xff\xfe 2.0 0.0 1.0\n";
        let err = load_reader(Cursor::new(bytes)).unwrap_err();
        match err {
            LoadError::Read { line, source } => {
                assert_eq!(line, 2);
                assert_eq!(source.kind(), io::ErrorKind::InvalidData);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn carriage_return_line_endings() {
        let cr_only = load_str("1.0 2.0 0.0 0.0\r3.0 4.0 0.0 0.9\r").unwrap();
        let crlf = load_str("1.0 2.0 0.0 0.0\r\n3.0 4.0 0.0 0.9\r\n").unwrap();
        let lf = load_str("1.0 2.0 0.0 0.0\n3.0 4.0 0.0 0.9\n").unwrap();
        assert_eq!(cr_only, lf);
        assert_eq!(crlf, lf);
        assert_eq!(lf.up.len(), 3);
    }

    #[test]
    fn carriage_return_lines_are_numbered() {
        let err = load_str("1.0 2.0 0.0 0.0\r1.0 2.0\r\n5.0 6.0 0.0 0.5\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingFields { line: 2, found: 2 }));

        let err = load_str("1.0 2.0 0.0 0.0\r\r5.0 6.0 0.0 0.5").unwrap_err();
        assert!(matches!(err, LoadError::MissingFields { line: 2, found: 0 }));
    }

    #[test]
    fn non_numeric_token_is_fatal() {
        let err = load_str("1.0 abc 0.0 1.0\n").unwrap_err();
        match err {
            LoadError::InvalidNumber {
                line, column, token, ..
            } => {
                assert_eq!(line, 1);
                assert_eq!(column, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_flag_reports_fourth_column() {
        let err = parse_record("1 2 3 yes", 7).unwrap_err();
        assert!(matches!(err, LoadError::InvalidNumber { line: 7, column: 4, .. }));
    }

    #[test]
    fn third_column_is_never_parsed() {
        let record = parse_record("1.5 -2.5 unused 1", 1).unwrap();
        assert_eq!(record, Record { x: 1.5, y: -2.5, flag: 1.0 });
    }

    #[test]
    fn surrounding_whitespace_and_extra_tokens_are_tolerated() {
        let record = parse_record("\t 1e2   2.0\t0 0.75 trailing  \r", 1).unwrap();
        assert_eq!(record, Record { x: 100.0, y: 2.0, flag: 0.75 });
    }

    #[test]
    fn fixture_file_counts() {
        let sets = load_file(&fixture("mixed.data")).unwrap();
        // 6 records, 2 flagged.
        assert_eq!(sets.up.len(), 6 + 2);
        assert_eq!(sets.down.len(), 2);
        assert!(sets.down.iter().all(|p| sets.up.contains(p)));
        assert_eq!(sets.up.first(), Some(&Point::new(-12.34, 518.21)));
    }

    #[test]
    fn fixture_with_bad_line_is_rejected() {
        let err = load_file(&fixture("malformed.data")).unwrap_err();
        assert!(matches!(err, LoadError::MissingFields { line: 3, found: 2 }));
    }

    #[test]
    fn missing_file_reports_path() {
        let path = fixture("does-not-exist.data");
        let err = load_file(&path).unwrap_err();
        match &err {
            LoadError::Open { path: p, source } => {
                assert_eq!(p, &path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("does-not-exist.data"));
    }
}
