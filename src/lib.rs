//! Micro-benchmark harness for dense square matrix multiplication.
//!
//! The computational core is deliberately tiny: generate two random n×n
//! matrices, multiply them with the textbook triple loop. The interesting
//! part is the instrumentation around it - each trial samples process CPU
//! load and used memory immediately before and after the multiply, so the
//! console report shows what one O(n³) pass costs the process.
//!
//! ## Usage
//!
//! ```
//! use matmul_bench::{multiply, Operands};
//!
//! let ops = Operands::generate(64, Some(42)).unwrap();
//! let c = multiply(&ops.a, &ops.b).unwrap();
//!
//! assert_eq!(c.rows(), 64);
//! assert_eq!(c.cols(), 64);
//! ```
//!
//! To run a full instrumented trial:
//!
//! ```
//! use matmul_bench::{metrics, run_trial, Operands};
//!
//! let ops = Operands::generate(64, None).unwrap();
//! let mut sampler = metrics::detect();
//! let report = run_trial(&ops, sampler.as_mut()).unwrap();
//!
//! println!("{}", report);
//! ```
//!
//! ## What's inside
//!
//! - `Matrix`: row-major f64 storage with fallible allocation
//! - Both scalar loop orders (i-j-k baseline, cache-friendly i-k-j)
//! - A platform-capability sampler (`sysinfo`-backed, sentinel fallback)
//! - A runner binary and a criterion bench with fresh operands per trial

pub mod error;
pub mod matrix;
pub mod metrics;
pub mod multiply;
pub mod operands;
pub mod trial;

pub use error::{Error, Result};
pub use matrix::Matrix;
pub use multiply::{multiply, multiply_ikj};
pub use operands::Operands;
pub use trial::{TrialReport, run_trial};
