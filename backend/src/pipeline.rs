//! High-level API: CSV bytes or file in, operation result out.
//!
//! # Example
//!
//! ```rust
//! use matrixops::{pipeline::run_bytes, Operation};
//!
//! let out = run_bytes(b"1,2\n3,4", Operation::Sum).unwrap();
//! assert_eq!(out.to_string(), "10");
//! ```

use std::fs::File;
use std::path::Path;

use crate::error::PipelineResult;
use crate::matrix::{Matrix, Operation, OperationOutput};
use crate::parser::{parse_bytes, parse_csv};

/// Parse and validate a matrix from CSV bytes.
pub fn load_matrix(bytes: &[u8]) -> PipelineResult<Matrix> {
    let rows = parse_bytes(bytes)?;
    Ok(Matrix::new(&rows)?)
}

/// Parse and validate a matrix from a CSV file.
pub fn load_matrix_file<P: AsRef<Path>>(path: P) -> PipelineResult<Matrix> {
    let file = File::open(path.as_ref())?;
    let rows = parse_csv(file)?;
    Ok(Matrix::new(&rows)?)
}

/// Full run on in-memory CSV.
pub fn run_bytes(bytes: &[u8], operation: Operation) -> PipelineResult<OperationOutput> {
    let matrix = load_matrix(bytes)?;
    Ok(operation.apply(&matrix))
}

/// Full run on a CSV file.
pub fn run_file<P: AsRef<Path>>(path: P, operation: Operation) -> PipelineResult<OperationOutput> {
    let matrix = load_matrix_file(path)?;
    Ok(operation.apply(&matrix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MatrixError, PipelineError};
    use std::io::Write;

    const SAMPLE: &[u8] = b"1,2,3\n4,5,6\n7,8,9\n";

    #[test]
    fn test_run_bytes() {
        assert_eq!(
            run_bytes(SAMPLE, Operation::Invert).unwrap(),
            OperationOutput::Text("1,4,7\n2,5,8\n3,6,9".into())
        );
        assert_eq!(
            run_bytes(SAMPLE, Operation::Multiply).unwrap(),
            OperationOutput::Integer(362880)
        );
    }

    #[test]
    fn test_empty_upload() {
        let err = run_bytes(b"", Operation::Echo).unwrap_err();
        assert!(matches!(err, PipelineError::Matrix(MatrixError::EmptyInput)));
        assert_eq!(err.to_string(), "error processing matrix: empty matrix");
    }

    #[test]
    fn test_uneven_rows_reported_by_matrix() {
        let err = run_bytes(b"1,2,3\n4,5\n7,8,9\n", Operation::Sum).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Matrix(MatrixError::RowLengthMismatch { row: 2, expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn test_spaced_cells() {
        let out = run_bytes(b"1, 2 ,3\n4,5,6\n7,8,9\n", Operation::Flatten).unwrap();
        assert_eq!(out.to_string(), "1,2,3,4,5,6,7,8,9");
    }

    #[test]
    fn test_csv_error_prefix() {
        let err = run_bytes(&[0xFF, b',', b'1'], Operation::Echo).unwrap_err();
        assert!(matches!(err, PipelineError::Csv(_)));
        assert!(err.to_string().starts_with("error parsing CSV: "));
    }

    #[test]
    fn test_run_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE).unwrap();

        let out = run_file(file.path(), Operation::Echo).unwrap();
        assert_eq!(out.to_string(), "1,2,3\n4,5,6\n7,8,9");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_file(dir.path().join("missing.csv"), Operation::Sum).unwrap_err();

        assert!(matches!(err, PipelineError::Io(_)));
        assert!(err.to_string().starts_with("error reading file: "), "{}", err);
    }
}
