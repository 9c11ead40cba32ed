//! Point-in-time memory, swap, and combined snapshots
//!
//! A [`Snapshot`] is built fresh from a single provider query; nothing is
//! cached or carried over between samples.

use crate::error::Result;
use crate::stats::{HostStats, StatsProvider};

/// Memory counters for one sample, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemorySnapshot {
    pub active: u64,
    pub available: u64,
    pub buffers: u64,
    pub cached: u64,
    pub free: u64,
    pub inactive: u64,
    pub shared: u64,
    pub total: u64,
    pub used: u64,
    pub wired: u64,
}

/// Swap counters for one sample, in bytes.
///
/// `used` is always recomputed here as total minus free rather than read
/// from the provider, so it cannot drift on platforms where the OS defines
/// its own "used" differently or not at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwapSnapshot {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

/// Combined RAM + swap counters, summed element-wise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TotalsSnapshot {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

/// One complete sample of the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub memory: MemorySnapshot,
    pub swap: SwapSnapshot,
    pub totals: TotalsSnapshot,
}

impl Snapshot {
    /// Query the provider once and derive the swap and combined figures.
    pub fn capture(provider: &mut dyn StatsProvider) -> Result<Self> {
        Ok(Self::from_stats(provider.host_stats()?))
    }

    fn from_stats(stats: HostStats) -> Self {
        let m = stats.memory;
        let memory = MemorySnapshot {
            active: m.active,
            available: m.available,
            buffers: m.buffers,
            cached: m.cached,
            free: m.free,
            inactive: m.inactive,
            shared: m.shared,
            total: m.total,
            used: m.used,
            wired: m.wired,
        };
        // Saturating: a provider reporting free > total must not panic us.
        let swap = SwapSnapshot {
            total: stats.swap.total,
            used: stats.swap.total.saturating_sub(stats.swap.free),
            free: stats.swap.free,
        };
        let totals = TotalsSnapshot {
            total: memory.total.saturating_add(swap.total),
            used: memory.used.saturating_add(swap.used),
            free: memory.free.saturating_add(swap.free),
        };
        Self { memory, swap, totals }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::stats::{MemoryCounters, MockStatsProvider, SwapCounters};

    fn host_stats(memory: MemoryCounters, swap: SwapCounters) -> HostStats {
        HostStats { memory, swap }
    }

    #[test]
    fn swap_used_is_total_minus_free() {
        let stats = host_stats(
            MemoryCounters { total: 1000, free: 400, used: 600, ..Default::default() },
            SwapCounters { total: 100, free: 25 },
        );
        let snapshot = Snapshot::from_stats(stats);
        assert_eq!(snapshot.swap.total, 100);
        assert_eq!(snapshot.swap.free, 25);
        assert_eq!(snapshot.swap.used, 75);
    }

    #[test]
    fn swap_free_above_total_clamps_to_zero() {
        let stats = host_stats(MemoryCounters::default(), SwapCounters { total: 10, free: 50 });
        let snapshot = Snapshot::from_stats(stats);
        assert_eq!(snapshot.swap.used, 0);
    }

    #[test]
    fn totals_are_elementwise_sums() {
        let stats = host_stats(
            MemoryCounters { total: 1000, free: 400, used: 600, ..Default::default() },
            SwapCounters { total: 100, free: 25 },
        );
        let snapshot = Snapshot::from_stats(stats);
        assert_eq!(snapshot.totals.total, 1100);
        assert_eq!(snapshot.totals.used, 675);
        assert_eq!(snapshot.totals.free, 425);
    }

    #[test]
    fn zero_counters_sum_to_zero() {
        let snapshot = Snapshot::from_stats(HostStats::default());
        assert_eq!(snapshot.totals, TotalsSnapshot::default());
    }

    #[test]
    fn memory_counters_pass_through_unchanged() {
        let memory = MemoryCounters {
            active: 1,
            available: 2,
            buffers: 3,
            cached: 4,
            free: 5,
            inactive: 6,
            shared: 7,
            total: 8,
            used: 9,
            wired: 10,
        };
        let snapshot = Snapshot::from_stats(host_stats(memory, SwapCounters::default()));
        assert_eq!(snapshot.memory.active, 1);
        assert_eq!(snapshot.memory.available, 2);
        assert_eq!(snapshot.memory.buffers, 3);
        assert_eq!(snapshot.memory.cached, 4);
        assert_eq!(snapshot.memory.free, 5);
        assert_eq!(snapshot.memory.inactive, 6);
        assert_eq!(snapshot.memory.shared, 7);
        assert_eq!(snapshot.memory.total, 8);
        assert_eq!(snapshot.memory.used, 9);
        assert_eq!(snapshot.memory.wired, 10);
    }

    #[test]
    fn capture_queries_provider_once() {
        let mut provider = MockStatsProvider::new();
        provider.expect_host_stats().times(1).returning(|| {
            Ok(HostStats {
                memory: MemoryCounters { total: 2048, free: 1024, used: 1024, ..Default::default() },
                swap: SwapCounters { total: 512, free: 512 },
            })
        });
        let snapshot = Snapshot::capture(&mut provider).unwrap();
        assert_eq!(snapshot.memory.total, 2048);
        assert_eq!(snapshot.swap.used, 0);
    }

    #[test]
    fn provider_failure_is_surfaced() {
        let mut provider = MockStatsProvider::new();
        provider
            .expect_host_stats()
            .times(1)
            .returning(|| Err(Error::stats("query failed")));
        assert!(Snapshot::capture(&mut provider).is_err());
    }
}
