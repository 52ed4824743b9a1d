//! Dense row-major matrix of f64.
//!
//! The backing store is a flat `Vec<f64>` indexed `i * cols + j`, same
//! layout the multiply loops expect. Allocation goes through
//! `try_reserve_exact` so an oversized request surfaces as
//! [`Error::Allocation`](crate::Error::Allocation) instead of aborting the
//! process.

use std::ops::Index;

use crate::error::{Error, Result};

/// A dense matrix with row-major storage.
///
/// Dimensions are fixed at construction. Operand matrices are read-only
/// after they're built; the multiply allocates a fresh result rather than
/// writing into either input.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// An all-zeros rows × cols matrix.
    pub fn zeros(rows: usize, cols: usize) -> Result<Matrix> {
        let len = rows * cols;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|source| Error::Allocation { rows, cols, source })?;
        data.resize(len, 0.0);
        Ok(Matrix { rows, cols, data })
    }

    /// The n × n identity matrix.
    pub fn identity(n: usize) -> Result<Matrix> {
        let mut m = Matrix::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// Build a matrix from nested rows. Every row must have the same length.
    ///
    /// # Panics
    ///
    /// Panics if the rows are ragged.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Matrix> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut m = Matrix::zeros(n_rows, n_cols)?;
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), n_cols, "row {} has length {}, expected {}", i, row.len(), n_cols);
            m.data[i * n_cols..(i + 1) * n_cols].copy_from_slice(row);
        }
        Ok(m)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element at (i, j), or `None` if out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    /// The flat row-major backing slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(i < self.rows && j < self.cols, "index ({}, {}) out of bounds for {}x{} matrix", i, j, self.rows, self.cols);
        &self.data[i * self.cols + j]
    }
}
