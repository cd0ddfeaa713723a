//! CSV reader producing raw string rows.
//!
//! Comma delimited, no header row, cells kept exactly as written (whitespace
//! is left for [`crate::Matrix::new`] to trim). Rows may have different
//! lengths here so that shape problems surface as matrix errors.

use std::io::Read;

use crate::error::CsvResult;

/// Read every record of a CSV stream as a row of strings.
///
/// Blank lines are skipped.
///
/// # Example
/// ```
/// use matrixops::parser::parse_csv;
///
/// let rows = parse_csv("1,2\n3,4\n".as_bytes()).unwrap();
/// assert_eq!(rows, vec![vec!["1", "2"], vec!["3", "4"]]);
/// ```
pub fn parse_csv<R: Read>(reader: R) -> CsvResult<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(rows)
}

/// Parse CSV held in memory, e.g. an uploaded form file.
pub fn parse_bytes(bytes: &[u8]) -> CsvResult<Vec<Vec<String>>> {
    parse_csv(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CsvError;

    #[test]
    fn test_simple_csv() {
        let rows = parse_bytes(b"1,2,3\n4,5,6\n7,8,9").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["1", "2", "3"]);
        assert_eq!(rows[2], vec!["7", "8", "9"]);
    }

    #[test]
    fn test_whitespace_preserved() {
        let rows = parse_bytes(b"1, 2 ,3\n").unwrap();
        assert_eq!(rows[0], vec!["1", " 2 ", "3"]);
    }

    #[test]
    fn test_quoted_values() {
        let rows = parse_bytes(b"\"1\",\"-2\"\n3,4\n").unwrap();
        assert_eq!(rows[0], vec!["1", "-2"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let rows = parse_bytes(b"1,2\r\n3,4\r\n").unwrap();
        assert_eq!(rows, vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn test_empty_lines_skipped() {
        let rows = parse_bytes(b"1,2\n\n3,4\n").unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_uneven_rows_kept() {
        let rows = parse_bytes(b"1,2,3\n4,5\n").unwrap();
        assert_eq!(rows[1].len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let rows = parse_bytes(b"").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_invalid_utf8() {
        let result = parse_bytes(&[b'1', b',', 0xFF, 0xFE, b'\n']);
        assert!(matches!(result, Err(CsvError::Parse(_))));
    }

    #[test]
    fn test_bare_quote_kept_in_field() {
        // Lenient quoting: the quote stays in the cell for the matrix to reject.
        let rows = parse_bytes(b"1,2\"\n3,4\n").unwrap();
        assert_eq!(rows[0], vec!["1", "2\""]);
    }

    #[test]
    fn test_parse_from_reader() {
        let file = std::io::Cursor::new("5,6\n7,8\n");
        let rows = parse_csv(file).unwrap();
        assert_eq!(rows, vec![vec!["5", "6"], vec!["7", "8"]]);
    }
}
