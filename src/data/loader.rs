use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{CompareError, Result};

use super::model::{Comparison, Record, Series, SeriesKind};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load both series from a benchmark data file.
///
/// Layout:
/// ```text
/// <size> <count>     first series (SHORTEST_CERTIFICATE)
/// -
/// <size> <count>     second series (FRECHET_LIGHT)
/// -                  optional at end of file
/// ```
/// Lines starting with `0` are skipped. The file is closed before this
/// returns, whether parsing succeeded or not.
pub fn load_file(path: &Path) -> Result<Comparison> {
    let file = File::open(path).map_err(|source| CompareError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let comparison = read_comparison(BufReader::new(file), path)?;

    log::info!(
        "Loaded {} with {} {} rows and {} {} rows",
        path.display(),
        comparison.first.len(),
        SeriesKind::First,
        comparison.second.len(),
        SeriesKind::Second,
    );
    Ok(comparison)
}

/// Parse both series from any line source. `origin` only names the source
/// in I/O errors.
pub fn read_comparison<R: BufRead>(reader: R, origin: &Path) -> Result<Comparison> {
    let mut lines = NumberedLines {
        inner: reader.lines(),
        line_no: 0,
        origin,
    };

    let first = read_series(&mut lines, SeriesKind::First)?;
    let second = read_series(&mut lines, SeriesKind::Second)?;

    Ok(Comparison { first, second })
}

// ---------------------------------------------------------------------------
// Section reader
// ---------------------------------------------------------------------------

struct NumberedLines<'a, I> {
    inner: I,
    line_no: usize,
    origin: &'a Path,
}

impl<I> NumberedLines<'_, I>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    fn next_line(&mut self) -> Result<Option<(usize, String)>> {
        match self.inner.next() {
            None => Ok(None),
            Some(Ok(line)) => {
                self.line_no += 1;
                Ok(Some((self.line_no, line)))
            }
            Some(Err(source)) => Err(CompareError::Io {
                path: self.origin.to_path_buf(),
                source,
            }),
        }
    }
}

/// Read one section up to its `-` terminator or end of input.
fn read_series<I>(lines: &mut NumberedLines<'_, I>, kind: SeriesKind) -> Result<Series>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    let mut series = Series::new(kind);

    while let Some((line_no, line)) = lines.next_line()? {
        if line.starts_with('-') {
            return Ok(series);
        }
        if line.starts_with('0') {
            log::debug!("line {line_no}: skipping '{line}'");
            continue;
        }
        let mut record = parse_record(&line, line_no, kind)?;
        record.size += kind.offset();
        series.records.push(record);
    }

    log::debug!("{kind} section ended at end of input");
    Ok(series)
}

/// Parse `<size> <count> [ignored...]`.
fn parse_record(line: &str, line_no: usize, kind: SeriesKind) -> Result<Record> {
    let parse_err = |message: String| CompareError::Parse {
        line: line_no,
        series: kind,
        message,
    };

    let mut tokens = line.split_whitespace();
    let (Some(size_tok), Some(count_tok)) = (tokens.next(), tokens.next()) else {
        return Err(parse_err(format!(
            "expected '<size> <count>', got '{}'",
            line.trim_end()
        )));
    };

    let size = size_tok
        .parse::<f64>()
        .map_err(|_| parse_err(format!("size '{size_tok}' is not a number")))?;
    let count = count_tok
        .parse::<i64>()
        .map_err(|_| parse_err(format!("count '{count_tok}' is not an integer")))?;

    Ok(Record { size, count })
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use super::*;

    fn parse(text: &str) -> Result<Comparison> {
        read_comparison(Cursor::new(text), Path::new("<memory>"))
    }

    fn pairs(series: &Series) -> Vec<(f64, i64)> {
        series.records.iter().map(|r| (r.size, r.count)).collect()
    }

    #[test]
    fn zero_lines_are_skipped_and_offsets_applied() {
        let cmp = parse("0 999\n1 5\n-\n2 7\n-").unwrap();
        assert_eq!(pairs(&cmp.first), vec![(1.0 - 0.2, 5)]);
        assert_eq!(pairs(&cmp.second), vec![(2.0 + 0.2, 7)]);
    }

    #[test]
    fn zero_line_in_second_section_is_skipped() {
        let cmp = parse("3 1\n-\n0 4\n5 2\n").unwrap();
        assert_eq!(pairs(&cmp.second), vec![(5.0 + 0.2, 2)]);
    }

    #[test]
    fn content_after_second_terminator_is_ignored() {
        let cmp = parse("1 1\n-\n2 2\n-\n3 3\nnot even numbers\n").unwrap();
        assert_eq!(cmp.first.len(), 1);
        assert_eq!(cmp.second.len(), 1);
    }

    #[test]
    fn any_dash_prefixed_line_terminates() {
        let cmp = parse("1 1\n--- end ---\n2 2\n-x\n").unwrap();
        assert_eq!(pairs(&cmp.first), vec![(0.8, 1)]);
        assert_eq!(pairs(&cmp.second), vec![(2.2, 2)]);
    }

    #[test]
    fn end_of_input_ends_both_sections() {
        let cmp = parse("1 1\n2 2\n").unwrap();
        assert_eq!(cmp.first.len(), 2);
        assert!(cmp.second.is_empty());

        let cmp = parse("").unwrap();
        assert!(cmp.first.is_empty());
        assert!(cmp.second.is_empty());
    }

    #[test]
    fn extra_tokens_are_ignored() {
        let cmp = parse("4 2 trailing words\n-\n-\n").unwrap();
        assert_eq!(pairs(&cmp.first), vec![(3.8, 2)]);
    }

    #[test]
    fn short_line_reports_its_line_number() {
        let err = parse("1 1\n-\n2 2\n7\n").unwrap_err();
        match err {
            CompareError::Parse { line, series, .. } => {
                assert_eq!(line, 4);
                assert_eq!(series, SeriesKind::Second);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn blank_line_is_a_parse_error() {
        let err = parse("1 1\n\n-\n").unwrap_err();
        assert!(matches!(err, CompareError::Parse { line: 2, .. }));
    }

    #[test]
    fn non_numeric_tokens_are_parse_errors() {
        let err = parse("abc 1\n-\n").unwrap_err();
        assert!(matches!(err, CompareError::Parse { line: 1, series: SeriesKind::First, .. }));

        // counts are integers
        let err = parse("1 2.5\n-\n").unwrap_err();
        assert!(err.to_string().contains("'2.5'"));
    }

    #[test]
    fn load_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1 10\n2 20\n-\n1 15\n2 25\n-\n").unwrap();

        let cmp = load_file(file.path()).unwrap();
        assert_eq!(cmp.first.len(), 2);
        assert_eq!(cmp.second.len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("nope_none.txt")).unwrap_err();
        assert!(matches!(err, CompareError::Io { .. }));
    }
}
