//! free - report memory and swap utilization for the current host
//!
//! A Rust rendition of the classic `free` utility. One sample reads the
//! host's memory and swap counters, scales them to a selected unit, and
//! renders a fixed-width table, JSON, or YAML; an optional interval
//! repeats the cycle.
//!
//! # Features
//!
//! - Binary (KiB..EiB) and SI (KB..EB) unit scales, with an `--si`
//!   override forcing a power-of-1000 base
//! - Plain-text table, 4-space-indented JSON, or YAML output
//! - Combined RAM + swap totals on request
//! - Single-shot, fixed-count, or endless interval sampling
//!
//! # Examples
//!
//! ```no_run
//! use free::snapshot::Snapshot;
//! use free::stats::SystemProvider;
//!
//! fn main() -> free::Result<()> {
//!     let mut provider = SystemProvider::new();
//!     let snapshot = Snapshot::capture(&mut provider)?;
//!
//!     println!("Total Memory: {} bytes", snapshot.memory.total);
//!     println!("Used Swap: {} bytes", snapshot.swap.used);
//!     Ok(())
//! }
//! ```
//!
//! Rendering a report the way the binary does:
//!
//! ```no_run
//! use free::prelude::*;
//!
//! fn main() -> free::Result<()> {
//!     let settings = ReportSettings {
//!         unit: Scale::Mebi.spec(false),
//!         mode: OutputMode::Json,
//!         show_total: true,
//!     };
//!     let mut provider = SystemProvider::new();
//!     let snapshot = Snapshot::capture(&mut provider)?;
//!     println!("{}", free::render::render(&snapshot, &settings)?);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod render;
pub mod runner;
pub mod snapshot;
pub mod stats;
pub mod units;

pub use error::{Error, Result};

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::render::{OutputMode, ReportSettings};
    pub use crate::runner::RunMode;
    pub use crate::snapshot::Snapshot;
    pub use crate::stats::{HostStats, StatsProvider, SystemProvider};
    pub use crate::units::{Scale, UnitSpec};
}
