//! Square integer matrix
//!
//! [`Matrix::new`] validates raw CSV rows and builds an immutable N×N grid.
//! The derived operations live on the matrix itself, [`operations`] names them
//! so the HTTP layer and the CLI can dispatch by name.
//!
//! ## Usage Flow
//!
//! ```text
//! rows of strings → Matrix::new → Matrix → Operation::apply → OperationOutput
//! ```

pub mod operations;

pub use operations::{operations_description, Operation, OperationOutput};

use std::fmt;

use crate::error::{MatrixError, MatrixResult};

/// An immutable N×N grid of signed integers, N ≥ 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    data: Vec<Vec<i64>>,
}

impl Matrix {
    /// Validate raw rows and build a matrix.
    ///
    /// Checks run in this order, the first failure wins:
    /// 1. no rows at all
    /// 2. per row: empty row, then length against the first row
    /// 3. square shape
    /// 4. per cell, row-major: integer parsing after trimming whitespace
    ///
    /// A non-square grid holding a bad cell is therefore reported as
    /// [`MatrixError::NotSquare`].
    ///
    /// # Example
    /// ```
    /// use matrixops::Matrix;
    ///
    /// let m = Matrix::new(&[vec!["1", "2"], vec!["3", " 4 "]]).unwrap();
    /// assert_eq!(m.echo(), "1,2\n3,4");
    /// ```
    pub fn new<R, S>(records: &[R]) -> MatrixResult<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let first = records.first().ok_or(MatrixError::EmptyInput)?;

        let rows = records.len();
        let cols = first.as_ref().len();

        for (i, row) in records.iter().enumerate() {
            let len = row.as_ref().len();
            if len == 0 {
                return Err(MatrixError::EmptyRow { row: i + 1 });
            }
            if len != cols {
                return Err(MatrixError::RowLengthMismatch {
                    row: i + 1,
                    expected: cols,
                    actual: len,
                });
            }
        }

        if rows != cols {
            return Err(MatrixError::NotSquare);
        }

        let data = records
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.as_ref()
                    .iter()
                    .enumerate()
                    .map(|(j, cell)| parse_cell(cell.as_ref(), i + 1, j + 1))
                    .collect::<MatrixResult<Vec<i64>>>()
            })
            .collect::<MatrixResult<Vec<Vec<i64>>>>()?;

        Ok(Self { data })
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Rows in order.
    pub fn rows(&self) -> &[Vec<i64>] {
        &self.data
    }

    /// All entries, row-major.
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.data.iter().flatten().copied()
    }

    /// Rows joined by `\n`, entries by `,`. No trailing newline.
    pub fn echo(&self) -> String {
        render_rows(&self.data, "\n")
    }

    /// The matrix with rows and columns swapped.
    pub fn transpose(&self) -> Matrix {
        let n = self.size();
        let data = (0..n)
            .map(|j| self.data.iter().map(|row| row[j]).collect())
            .collect();
        Matrix { data }
    }

    /// [`Matrix::transpose`] rendered like [`Matrix::echo`].
    pub fn invert(&self) -> String {
        self.transpose().echo()
    }

    /// Every entry row-major on a single comma separated line.
    pub fn flatten(&self) -> String {
        render_rows(&self.data, ",")
    }

    /// Sum of all entries. `i128` holds any sum of in-memory `i64` entries.
    pub fn sum(&self) -> i128 {
        self.values().map(i128::from).sum()
    }

    /// Product of all entries.
    ///
    /// A zero entry yields zero. Otherwise the sign follows the number of
    /// negative entries and the magnitude saturates at the `i128` bounds.
    pub fn multiply(&self) -> i128 {
        let mut negative = false;
        let mut magnitude = Some(1u128);

        for value in self.values() {
            if value == 0 {
                return 0;
            }
            negative ^= value < 0;
            magnitude = magnitude.and_then(|m| m.checked_mul(u128::from(value.unsigned_abs())));
        }

        let limit = if negative {
            i128::MIN.unsigned_abs()
        } else {
            i128::MAX.unsigned_abs()
        };

        match magnitude {
            Some(m) if m <= limit && negative => (m as i128).wrapping_neg(),
            Some(m) if m <= limit => m as i128,
            _ if negative => i128::MIN,
            _ => i128::MAX,
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.echo())
    }
}

fn parse_cell(raw: &str, row: usize, col: usize) -> MatrixResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| MatrixError::InvalidInteger {
            row,
            col,
            value: raw.to_string(),
        })
}

fn render_rows(rows: &[Vec<i64>], row_separator: &str) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join(row_separator)
}
