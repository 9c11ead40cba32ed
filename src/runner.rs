//! Render scheduling: once, forever, or a fixed number of cycles
//!
//! The loop is synchronous and single-threaded on purpose; the only
//! blocking operation is the sleep between cycles, and there is nothing
//! else to schedule around it.

use std::io::Write;
use std::thread;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::render::{self, ReportSettings};
use crate::snapshot::Snapshot;
use crate::stats::StatsProvider;

/// How many times to sample and render, and how far apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Sample and render a single time.
    Once,
    /// Sample and render every `interval` until interrupted.
    Every { interval: Duration },
    /// Sample and render exactly `count` times, `interval` apart.
    Repeat { interval: Duration, count: u64 },
}

impl RunMode {
    /// Resolve the `--seconds`/`--count` pair, where zero means the flag
    /// was not given. A repeat count without an interval is a
    /// configuration error, rejected before anything is sampled.
    pub fn from_schedule(seconds: u64, count: u64) -> Result<Self> {
        match (seconds, count) {
            (0, 0) => Ok(RunMode::Once),
            (s, 0) => Ok(RunMode::Every { interval: Duration::from_secs(s) }),
            (0, _) => Err(Error::config("--count requires --seconds")),
            (s, c) => Ok(RunMode::Repeat { interval: Duration::from_secs(s), count: c }),
        }
    }
}

/// Drive sample → render cycles according to `mode`, writing each report
/// to `out` with a blank separator line between consecutive cycles and
/// none after the last.
///
/// Any sampling or rendering failure aborts immediately; a failed cycle
/// emits nothing.
pub fn run<W: Write>(
    mode: RunMode,
    provider: &mut dyn StatsProvider,
    settings: &ReportSettings,
    out: &mut W,
) -> Result<()> {
    match mode {
        RunMode::Once => cycle(provider, settings, out),
        RunMode::Every { interval } => loop {
            cycle(provider, settings, out)?;
            writeln!(out)?;
            thread::sleep(interval);
        },
        RunMode::Repeat { interval, count } => {
            for i in 1..=count {
                cycle(provider, settings, out)?;
                if i != count {
                    writeln!(out)?;
                    thread::sleep(interval);
                }
            }
            Ok(())
        },
    }
}

fn cycle<W: Write>(provider: &mut dyn StatsProvider, settings: &ReportSettings, out: &mut W) -> Result<()> {
    let snapshot = Snapshot::capture(provider)?;
    let report = render::render(&snapshot, settings)?;
    writeln!(out, "{report}")?;
    Ok(())
}
