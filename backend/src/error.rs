//! Error types for the matrixops service.
//!
//! - [`MatrixError`] - Matrix validation errors
//! - [`CsvError`] - CSV reading errors
//! - [`PipelineError`] - Bytes to result orchestration errors
//! - [`ServerError`] - HTTP boundary errors
//! - [`ConfigError`] - Configuration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Matrix Validation Errors
// =============================================================================

/// Errors raised while turning raw rows into a [`crate::Matrix`].
///
/// Positions are 1-based. Validation order decides which variant is reported
/// when several violations are present, see [`crate::Matrix::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// No rows at all.
    #[error("empty matrix")]
    EmptyInput,

    /// A row without any column.
    #[error("empty row at position {row}")]
    EmptyRow { row: usize },

    /// A row whose length differs from the first row.
    #[error("inconsistent row length at position {row}: expected {expected}, got {actual}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Row count differs from column count.
    #[error("matrix must be square")]
    NotSquare,

    /// A cell that is not a plain integer once trimmed. `value` is untrimmed.
    #[error("invalid integer at position [{row},{col}]: {value}")]
    InvalidInteger {
        row: usize,
        col: usize,
        value: String,
    },
}

// =============================================================================
// CSV Errors
// =============================================================================

/// Errors while reading CSV input.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Malformed CSV.
    #[error("{0}")]
    Parse(#[from] csv::Error),
}

// =============================================================================
// Pipeline Errors
// =============================================================================

/// Errors from [`crate::pipeline`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input file could not be opened.
    #[error("error reading file: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading error.
    #[error("error parsing CSV: {0}")]
    Csv(#[from] CsvError),

    /// Matrix validation error.
    #[error("error processing matrix: {0}")]
    Matrix(#[from] MatrixError),
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// No `file` field in the upload.
    #[error("error reading file: no file field in form")]
    MissingFile,

    /// The multipart body could not be read.
    #[error("error reading file: {0}")]
    Multipart(String),

    /// Parsing or validation failed.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// Could not bind or serve.
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while reading configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable holds an unusable value.
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for matrix construction.
pub type MatrixResult<T> = Result<T, MatrixError>;

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_error_messages() {
        assert_eq!(MatrixError::EmptyInput.to_string(), "empty matrix");
        assert_eq!(MatrixError::NotSquare.to_string(), "matrix must be square");
        assert_eq!(
            MatrixError::EmptyRow { row: 2 }.to_string(),
            "empty row at position 2"
        );
        assert_eq!(
            MatrixError::RowLengthMismatch { row: 2, expected: 3, actual: 2 }.to_string(),
            "inconsistent row length at position 2: expected 3, got 2"
        );
        assert_eq!(
            MatrixError::InvalidInteger { row: 2, col: 2, value: "abc".into() }.to_string(),
            "invalid integer at position [2,2]: abc"
        );
    }

    #[test]
    fn test_error_conversion_chain() {
        // MatrixError -> PipelineError -> ServerError
        let pipeline_err: PipelineError = MatrixError::NotSquare.into();
        assert_eq!(
            pipeline_err.to_string(),
            "error processing matrix: matrix must be square"
        );

        let server_err: ServerError = pipeline_err.into();
        assert_eq!(
            server_err.to_string(),
            "error processing matrix: matrix must be square"
        );
    }

    #[test]
    fn test_missing_file_message() {
        assert!(ServerError::MissingFile
            .to_string()
            .starts_with("error reading file:"));
    }
}
