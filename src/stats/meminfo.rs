//! `/proc/meminfo` detail counters not surfaced by sysinfo.

use std::fs;

use crate::error::Result;

const MEMINFO_PATH: &str = "/proc/meminfo";

/// Counters parsed out of `/proc/meminfo`, converted to bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Detail {
    pub active: u64,
    pub buffers: u64,
    pub cached: u64,
    pub inactive: u64,
    pub shared: u64,
}

pub(crate) fn read() -> Result<Detail> {
    let text = fs::read_to_string(MEMINFO_PATH)?;
    Ok(parse(&text))
}

/// Lines look like `Active:  1234 kB`; unknown keys are skipped and a
/// malformed value reads as zero rather than aborting the sample.
fn parse(text: &str) -> Detail {
    let mut detail = Detail::default();
    for line in text.lines() {
        let mut parts = line.split_whitespace();
        let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
            continue;
        };
        let bytes = value.parse::<u64>().unwrap_or(0).saturating_mul(1024);
        match key {
            "Active:" => detail.active = bytes,
            "Buffers:" => detail.buffers = bytes,
            "Cached:" => detail.cached = bytes,
            "Inactive:" => detail.inactive = bytes,
            "Shmem:" => detail.shared = bytes,
            _ => {}
        }
    }
    detail
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "\
MemTotal:       16384000 kB
MemFree:         8192000 kB
MemAvailable:   12288000 kB
Buffers:          204800 kB
Cached:          2048000 kB
SwapCached:            0 kB
Active:          4096000 kB
Inactive:        1024000 kB
Shmem:            512000 kB
SwapTotal:       2097152 kB
SwapFree:        2097152 kB
";

    #[test]
    fn parses_detail_counters_as_bytes() {
        let detail = parse(FIXTURE);
        assert_eq!(detail.active, 4_096_000 * 1024);
        assert_eq!(detail.buffers, 204_800 * 1024);
        assert_eq!(detail.cached, 2_048_000 * 1024);
        assert_eq!(detail.inactive, 1_024_000 * 1024);
        assert_eq!(detail.shared, 512_000 * 1024);
    }

    #[test]
    fn skips_unknown_and_malformed_lines() {
        let detail = parse("Bogus line\nActive: not-a-number kB\nBuffers: 10 kB\n");
        assert_eq!(detail.active, 0);
        assert_eq!(detail.buffers, 10 * 1024);
    }

    #[test]
    fn empty_input_yields_zeroes() {
        assert_eq!(parse(""), Detail::default());
    }
}
