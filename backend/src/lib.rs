//! # matrixops - square integer matrix operations over CSV
//!
//! Accepts a CSV-encoded N×N integer matrix and returns one of: the matrix
//! itself, its transpose, a flattened line, the sum or the product of all
//! entries.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV upload │────▶│   Parser    │────▶│   Matrix    │────▶│  Operation  │
//! │  or file    │     │ (raw rows)  │     │ (validated) │     │   result    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use matrixops::{Matrix, Operation};
//!
//! let m = Matrix::new(&[vec!["1", "2"], vec!["3", "4"]]).unwrap();
//! assert_eq!(Operation::Invert.apply(&m).to_string(), "1,3\n2,4");
//! assert_eq!(m.multiply(), 24);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`matrix`] - Matrix validation and operations
//! - [`parser`] - CSV reading
//! - [`pipeline`] - Bytes or file to result
//! - [`config`] - Server configuration
//! - [`api`] - HTTP API server

// Core modules
pub mod error;
pub mod matrix;

// Parsing
pub mod parser;

// Orchestration
pub mod pipeline;

// Configuration
pub mod config;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConfigError, CsvError, MatrixError, PipelineError, ServerError};

pub use matrix::{operations_description, Matrix, Operation, OperationOutput};

pub use parser::{parse_bytes, parse_csv};

pub use pipeline::{load_matrix, load_matrix_file, run_bytes, run_file};

pub use config::ServerConfig;

// Server
pub mod server {
    pub use crate::api::server::{router, start_server};
}
