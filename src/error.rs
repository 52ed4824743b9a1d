//! Error type for matrix construction and multiplication.

use std::collections::TryReserveError;

/// Errors surfaced by the core operations.
///
/// Both variants are fatal to the current trial and propagate straight to
/// whoever orchestrates trials. Metric unavailability is deliberately not
/// here - a sampler that can't read a metric reports a sentinel instead of
/// failing the trial.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backing store for a matrix could not be allocated.
    #[error("failed to allocate {rows}x{cols} matrix: {source}")]
    Allocation {
        rows: usize,
        cols: usize,
        source: TryReserveError,
    },

    /// Left operand's column count doesn't match right operand's row count.
    #[error("dimension mismatch: cannot multiply {lhs_rows}x{lhs_cols} by {rhs_rows}x{rhs_cols}")]
    DimensionMismatch {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
