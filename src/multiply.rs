//! Scalar matrix multiplication in both textbook loop orders.
//!
//! No blocking, no transposition, no SIMD - this crate benchmarks the
//! plain triple loop, so the plain triple loop is what's here. The i-k-j
//! variant is kept alongside because swapping the two inner loops makes
//! the innermost accesses sequential, and comparing the two orders is the
//! most instructive thing the benchmark shows.

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Multiply two matrices with the naive i-j-k triple loop.
///
/// Computes C where `C[i][j] = Σ_k A[i][k] * B[k][j]`, accumulating in
/// plain f64 (no compensated summation). The inner loop walks B
/// column-wise with stride n, which is what makes this the slow baseline.
///
/// Inputs are untouched; the result is freshly allocated. Returns
/// [`Error::DimensionMismatch`] when A's column count doesn't equal B's
/// row count.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let (m, n, k) = check_dims(a, b)?;
    let mut c = Matrix::zeros(m, n)?;
    let (av, bv, cv) = (a.as_slice(), b.as_slice(), c.as_mut_slice());
    for i in 0..m {
        for j in 0..n {
            let mut acc = 0.0;
            for p in 0..k {
                acc += av[i * k + p] * bv[p * n + j];
            }
            cv[i * n + j] = acc;
        }
    }
    Ok(c)
}

/// Same contract as [`multiply`], i-k-j loop order.
///
/// The innermost loop reads B and writes C at stride 1, so this is the
/// cache-friendly scalar variant the benchmark compares against.
pub fn multiply_ikj(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let (m, n, k) = check_dims(a, b)?;
    let mut c = Matrix::zeros(m, n)?;
    let (av, bv, cv) = (a.as_slice(), b.as_slice(), c.as_mut_slice());
    for i in 0..m {
        for p in 0..k {
            let aip = av[i * k + p];
            for j in 0..n {
                cv[i * n + j] += aip * bv[p * n + j];
            }
        }
    }
    Ok(c)
}

fn check_dims(a: &Matrix, b: &Matrix) -> Result<(usize, usize, usize)> {
    if a.cols() != b.rows() {
        return Err(Error::DimensionMismatch {
            lhs_rows: a.rows(),
            lhs_cols: a.cols(),
            rhs_rows: b.rows(),
            rhs_cols: b.cols(),
        });
    }
    Ok((a.rows(), b.cols(), a.cols()))
}
