//! One timed multiply with resource samples around it.

use std::fmt;
use std::time::{Duration, Instant};

use crate::error::Result;
use crate::metrics::{ResourceSampler, ResourceUsage};
use crate::multiply::multiply;
use crate::operands::Operands;

/// What one trial observed: wall-clock time for the multiply plus the
/// resource snapshots taken immediately before and after it.
#[derive(Debug, Clone, Copy)]
pub struct TrialReport {
    pub n: usize,
    pub elapsed: Duration,
    pub before: ResourceUsage,
    pub after: ResourceUsage,
}

/// Run one trial: sample, multiply, sample.
///
/// The operands are read-only; the product is computed and dropped. The
/// sequence is strictly sequential with no suspension points, so the two
/// samples bracket exactly the multiply.
pub fn run_trial(operands: &Operands, sampler: &mut dyn ResourceSampler) -> Result<TrialReport> {
    let before = sampler.sample();
    let start = Instant::now();
    multiply(&operands.a, &operands.b)?;
    let elapsed = start.elapsed();
    let after = sampler.sample();
    Ok(TrialReport {
        n: operands.n(),
        elapsed,
        before,
        after,
    })
}

impl fmt::Display for TrialReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CPU Usage before: {}%", self.before.cpu_percent)?;
        writeln!(f, "CPU Usage after: {}%", self.after.cpu_percent)?;
        writeln!(f, "Memory Usage before: {} MB", self.before.memory_mb())?;
        write!(f, "Memory Usage after: {} MB", self.after.memory_mb())
    }
}
