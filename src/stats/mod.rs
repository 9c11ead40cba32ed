//! Host memory and swap statistics
//!
//! This module is the seam between the report pipeline and the operating
//! system. The [`StatsProvider`] trait yields one fixed-shape counter
//! record per query; everything downstream treats that record as opaque
//! data and never reaches for OS APIs itself.
//!
//! The default [`SystemProvider`] reads the cross-platform counters
//! through the `sysinfo` crate. On Linux the counters sysinfo does not
//! surface (buffers, cached, shared, active, inactive) are filled in from
//! `/proc/meminfo`; on other targets they report as zero.

#[cfg(target_os = "linux")]
mod meminfo;

use sysinfo::System;

use crate::error::{Error, Result};

#[cfg(test)]
use mockall::automock;

/// Raw memory counters reported by the host, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryCounters {
    pub active: u64,
    pub available: u64,
    pub buffers: u64,
    pub cached: u64,
    pub free: u64,
    pub inactive: u64,
    pub shared: u64,
    pub total: u64,
    pub used: u64,
    /// Memory pinned by the kernel; reported only on hosts that track it.
    pub wired: u64,
}

/// Raw swap counters, in bytes.
///
/// Deliberately has no `used` field: how much swap is in use is derived
/// at sample time from total and free, so the figure stays consistent on
/// platforms where the OS reports no usable "used" counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwapCounters {
    pub total: u64,
    pub free: u64,
}

/// One host statistics read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostStats {
    pub memory: MemoryCounters,
    pub swap: SwapCounters,
}

/// Source of host memory statistics.
#[cfg_attr(test, automock)]
pub trait StatsProvider {
    /// Query the host once for current memory and swap counters.
    ///
    /// A failed query surfaces as [`Error::Stats`]; partial records are
    /// never returned.
    fn host_stats(&mut self) -> Result<HostStats>;
}

/// Default provider backed by the `sysinfo` crate.
pub struct SystemProvider {
    system: System,
}

impl SystemProvider {
    /// Creates a provider querying the local host.
    pub fn new() -> Self {
        Self { system: System::new() }
    }
}

impl Default for SystemProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsProvider for SystemProvider {
    #[tracing::instrument(level = "debug", skip(self))]
    fn host_stats(&mut self) -> Result<HostStats> {
        self.system.refresh_memory();

        let mut memory = MemoryCounters {
            available: self.system.available_memory(),
            free: self.system.free_memory(),
            total: self.system.total_memory(),
            used: self.system.used_memory(),
            ..MemoryCounters::default()
        };
        let swap = SwapCounters {
            total: self.system.total_swap(),
            free: self.system.free_swap(),
        };

        if memory.total == 0 {
            return Err(Error::stats("host reported zero total memory"));
        }

        fill_platform_counters(&mut memory)?;

        tracing::debug!(total = memory.total, free = memory.free, "sampled host memory");

        Ok(HostStats { memory, swap })
    }
}

/// Fill in the counters sysinfo does not surface.
#[cfg(target_os = "linux")]
fn fill_platform_counters(memory: &mut MemoryCounters) -> Result<()> {
    let detail = meminfo::read()?;
    memory.active = detail.active;
    memory.buffers = detail.buffers;
    memory.cached = detail.cached;
    memory.inactive = detail.inactive;
    memory.shared = detail.shared;
    // Linux counts buffers and page cache as reclaimable, not used.
    memory.used = memory
        .total
        .saturating_sub(memory.free)
        .saturating_sub(detail.buffers)
        .saturating_sub(detail.cached);
    Ok(())
}

#[cfg(not(target_os = "linux"))]
fn fill_platform_counters(_memory: &mut MemoryCounters) -> Result<()> {
    Ok(())
}
