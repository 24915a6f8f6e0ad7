//! Square-matrix helpers: random generation, multiplication, serialization.

use rand::Rng;

use crate::Error;

/// Separator line written after each serialized matrix.
pub const SEPARATOR: &str = "====================";

/// A rectangular integer matrix stored row-major.
///
/// Cells are `i64` so dot products of the small random values moving
/// through the pipeline can never overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Vec<i64>>,
}

impl Matrix {
    /// Creates a matrix from rows, checking that the shape is non-empty
    /// and rectangular.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, Error> {
        let width = match rows.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(Error::MalformedMatrix),
        };
        if rows.iter().any(|row| row.len() != width) {
            return Err(Error::MalformedMatrix);
        }
        Ok(Self { rows })
    }

    /// Generates a `size`×`size` matrix with cells drawn uniformly from
    /// 0..=10. `size` must be positive.
    pub fn random(size: usize) -> Self {
        let mut rng = rand::thread_rng();
        let rows = (0..size)
            .map(|_| (0..size).map(|_| rng.gen_range(0..=10)).collect())
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.rows[0].len()
    }

    /// Multiplies `self` by `other`.
    ///
    /// Fails when the column count of `self` does not match the row count
    /// of `other`. The result is `self.rows()` × `other.cols()`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, Error> {
        if self.cols() != other.rows() {
            return Err(Error::DimensionMismatch(
                self.rows(),
                self.cols(),
                other.rows(),
                other.cols(),
            ));
        }

        let m = self.rows();
        let n = self.cols();
        let p = other.cols();
        let mut result = vec![vec![0i64; p]; m];
        for i in 0..m {
            for j in 0..p {
                for k in 0..n {
                    result[i][j] += self.rows[i][k] * other.rows[k][j];
                }
            }
        }
        Ok(Matrix { rows: result })
    }

    /// Serializes the matrix as one space-separated line per row followed
    /// by a separator line of twenty `=` characters. This exact format is
    /// the results-file contract.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            let line = row
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str(SEPARATOR);
        out.push('\n');
        out
    }
}
