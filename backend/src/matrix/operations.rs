//! Matrix operations exposed by the service
//!
//! Each [`Operation`] maps to one HTTP endpoint and one CLI value.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Matrix;

/// All available matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Reproduce the matrix
    Echo,

    /// Swap rows and columns
    Invert,

    /// All entries on one line, row-major
    Flatten,

    /// Sum of all entries
    Sum,

    /// Product of all entries
    Multiply,
}

impl Operation {
    /// Every operation, in endpoint order.
    pub const ALL: [Operation; 5] = [
        Operation::Echo,
        Operation::Invert,
        Operation::Flatten,
        Operation::Sum,
        Operation::Multiply,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Echo => "echo",
            Operation::Invert => "invert",
            Operation::Flatten => "flatten",
            Operation::Sum => "sum",
            Operation::Multiply => "multiply",
        }
    }

    /// HTTP route serving this operation.
    pub fn path(self) -> &'static str {
        match self {
            Operation::Echo => "/echo",
            Operation::Invert => "/invert",
            Operation::Flatten => "/flatten",
            Operation::Sum => "/sum",
            Operation::Multiply => "/multiply",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Operation::Echo => "Matrix as rows of comma separated values",
            Operation::Invert => "Transposed matrix, same format as echo",
            Operation::Flatten => "All values on a single comma separated line",
            Operation::Sum => "Sum of all values",
            Operation::Multiply => "Product of all values",
        }
    }

    /// Run the operation. Total for any validated matrix.
    pub fn apply(self, matrix: &Matrix) -> OperationOutput {
        match self {
            Operation::Echo => OperationOutput::Text(matrix.echo()),
            Operation::Invert => OperationOutput::Text(matrix.invert()),
            Operation::Flatten => OperationOutput::Text(matrix.flatten()),
            Operation::Sum => OperationOutput::Integer(matrix.sum()),
            Operation::Multiply => OperationOutput::Integer(matrix.multiply()),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of an [`Operation`]: rendered text or a decimal integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OperationOutput {
    Text(String),
    Integer(i128),
}

impl fmt::Display for OperationOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationOutput::Text(text) => f.write_str(text),
            OperationOutput::Integer(value) => write!(f, "{}", value),
        }
    }
}

/// Human-readable table of the operations, used by `matrixops operations`.
pub fn operations_description() -> String {
    let mut out = String::from("Available matrix operations:\n\n");
    out.push_str("| Operation | Endpoint | Description |\n");
    out.push_str("|-----------|----------|-------------|\n");
    for op in Operation::ALL {
        out.push_str(&format!(
            "| {} | POST {} | {} |\n",
            op.name(),
            op.path(),
            op.description()
        ));
    }
    out.push_str("\nUpload the CSV matrix as the multipart form field \"file\".");
    out
}
