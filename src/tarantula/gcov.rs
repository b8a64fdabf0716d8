//! Reading gcov line annotations.
//!
//! A `.gcov` file starts with five `-:    0:` header records, then carries one
//! record per source line. The first nine characters of a record are its run
//! count: a number, `-` for lines with no code, or `#####` for code that
//! never ran.

use std::fs;
use std::path::Path;

use crate::error::TarantulaError;

/// Header records before the first source line.
pub const HEADER_LINES: usize = 5;

/// Width of the run-count column.
pub const COUNT_WIDTH: usize = 9;

/// Which source lines ran, indexed from source line 1.
#[must_use]
pub fn parse_executed_lines(text: &str) -> Vec<bool> {
    text.lines().skip(HEADER_LINES).map(was_run).collect()
}

/// Read and parse a coverage file. A file with no line records is an error.
pub fn read_executed_lines(path: &Path) -> Result<Vec<bool>, TarantulaError> {
    let text = fs::read_to_string(path).map_err(|source| TarantulaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = parse_executed_lines(&text);
    if lines.is_empty() {
        return Err(TarantulaError::EmptyCoverage(path.to_path_buf()));
    }
    Ok(lines)
}

/// A record ran iff its count column starts with a positive integer.
fn was_run(record: &str) -> bool {
    let field: String = record.chars().take(COUNT_WIDTH).collect();
    let field = field.trim_start();
    let field = field.strip_prefix('+').unwrap_or(field);
    field
        .bytes()
        .take_while(u8::is_ascii_digit)
        .any(|digit| digit != b'0')
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
        -:    0:Source:dominion.c
        -:    0:Graph:dominion.gcno
        -:    0:Data:dominion.gcda
        -:    0:Runs:1
        -:    0:Programs:1
        -:    1:#include \"dominion.h\"
       12:    2:int compare(const void* a, const void* b) {
    #####:    3:  if (*(int*)a > *(int*)b)
        3*:   4:    return 1;
        0:    5:  return 0;
";

    #[test]
    fn test_parse_sample() {
        assert_eq!(
            parse_executed_lines(SAMPLE),
            vec![false, true, false, true, false]
        );
    }

    #[test]
    fn test_count_column_only() {
        // a count past column nine is source text, not a count
        assert!(!was_run("         7:   1:x"));
        assert!(was_run("  1234567:   1:x"));
        assert!(!was_run("       -4:   1:x"));
        assert!(was_run("      +2:   1:x"));
        assert!(!was_run(""));
    }

    #[test]
    fn test_header_only_is_empty() {
        let header: String = SAMPLE.lines().take(HEADER_LINES).map(|l| format!("{l}\n")).collect();
        assert!(parse_executed_lines(&header).is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_executed_lines(Path::new("/nonexistent/dominion.c.gcov")).unwrap_err();
        assert!(matches!(err, TarantulaError::Io { .. }));
    }
}
