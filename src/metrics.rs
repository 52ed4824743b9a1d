//! Process resource sampling behind a capability interface.
//!
//! The benchmark reads process CPU load and used memory before and after
//! each multiply. Whether those metrics exist at all depends on the
//! platform, so the reads sit behind [`ResourceSampler`] with two
//! implementations: [`ProcessSampler`] on platforms `sysinfo` supports,
//! and [`UnsupportedSampler`] everywhere else. [`detect`] picks one at
//! startup. A missing metric is reported as a sentinel, never as an error
//! - sampling must not abort a trial.

use sysinfo::{Pid, ProcessRefreshKind, System};

/// CPU load reported when the platform can't measure it.
pub const CPU_UNAVAILABLE: f64 = -1.0;

/// A point-in-time snapshot of this process's resource usage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceUsage {
    /// Process CPU load in [0, 100], or [`CPU_UNAVAILABLE`].
    pub cpu_percent: f64,
    /// Used memory in bytes, `None` when the platform can't report it.
    pub memory_bytes: Option<u64>,
}

impl ResourceUsage {
    /// Used memory in whole megabytes, or -1 when unavailable.
    pub fn memory_mb(&self) -> i64 {
        match self.memory_bytes {
            Some(bytes) => (bytes / (1024 * 1024)) as i64,
            None => -1,
        }
    }
}

/// Read-only, side-effect-free process metrics.
pub trait ResourceSampler {
    fn sample(&mut self) -> ResourceUsage;
}

/// Pick the sampler for the current platform.
pub fn detect() -> Box<dyn ResourceSampler> {
    match ProcessSampler::new() {
        Some(sampler) => Box::new(sampler),
        None => Box::new(UnsupportedSampler),
    }
}

/// Sampler backed by `sysinfo`'s process table.
///
/// CPU usage comes back summed across cores, so it's normalized by the
/// logical core count and clamped to [0, 100]. The very first sample has
/// no prior refresh to diff against and reads as 0.
pub struct ProcessSampler {
    system: System,
    pid: Pid,
    num_cpus: usize,
}

impl ProcessSampler {
    /// `None` when `sysinfo` doesn't support this platform or can't
    /// resolve the current pid.
    pub fn new() -> Option<ProcessSampler> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return None;
        }
        let pid = sysinfo::get_current_pid().ok()?;
        let system = System::new_all();
        let num_cpus = system.cpus().len().max(1);
        Some(ProcessSampler { system, pid, num_cpus })
    }
}

impl ResourceSampler for ProcessSampler {
    fn sample(&mut self) -> ResourceUsage {
        let refreshed = self.system.refresh_process_specifics(
            self.pid,
            ProcessRefreshKind::new().with_cpu().with_memory(),
        );
        if !refreshed {
            return ResourceUsage {
                cpu_percent: CPU_UNAVAILABLE,
                memory_bytes: None,
            };
        }
        match self.system.process(self.pid) {
            Some(process) => ResourceUsage {
                cpu_percent: (f64::from(process.cpu_usage()) / self.num_cpus as f64)
                    .clamp(0.0, 100.0),
                memory_bytes: Some(process.memory()),
            },
            None => ResourceUsage {
                cpu_percent: CPU_UNAVAILABLE,
                memory_bytes: None,
            },
        }
    }
}

/// Sampler for platforms without process metrics. Always the sentinels.
pub struct UnsupportedSampler;

impl ResourceSampler for UnsupportedSampler {
    fn sample(&mut self) -> ResourceUsage {
        ResourceUsage {
            cpu_percent: CPU_UNAVAILABLE,
            memory_bytes: None,
        }
    }
}
