//! Snapshot rendering: fixed-width text, JSON, and YAML
//!
//! Every displayed figure is the raw byte count integer-divided by the
//! unit divisor. The structured formats encode all figures as strings;
//! consumers of the classic tool parse that shape, so it is a contract,
//! not an accident.

use serde::Serialize;

use crate::error::Result;
use crate::snapshot::Snapshot;
use crate::units::UnitSpec;

/// Output format for a rendered snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
    Yaml,
}

/// Presentation settings shared by every render cycle.
#[derive(Debug, Clone, Copy)]
pub struct ReportSettings {
    pub unit: UnitSpec,
    pub mode: OutputMode,
    pub show_total: bool,
}

/// Serializable report shape shared by the JSON and YAML encoders.
///
/// Field order is alphabetical within each section, matching the sorted
/// key order the original structured output carried.
#[derive(Debug, Serialize)]
struct Report {
    descriptor: String,
    memory: MemorySection,
    swap: UsageSection,
    #[serde(skip_serializing_if = "Option::is_none")]
    total: Option<UsageSection>,
}

#[derive(Debug, Serialize)]
struct MemorySection {
    active: String,
    available: String,
    free: String,
    inactive: String,
    total: String,
    used: String,
    wired: String,
}

#[derive(Debug, Serialize)]
struct UsageSection {
    free: String,
    total: String,
    used: String,
}

impl Report {
    fn new(snapshot: &Snapshot, unit: &UnitSpec, show_total: bool) -> Self {
        let divisor = unit.divisor();
        let scaled = |bytes: u64| (bytes / divisor).to_string();

        Report {
            descriptor: unit.descriptor(),
            memory: MemorySection {
                active: scaled(snapshot.memory.active),
                available: scaled(snapshot.memory.available),
                free: scaled(snapshot.memory.free),
                inactive: scaled(snapshot.memory.inactive),
                total: scaled(snapshot.memory.total),
                used: scaled(snapshot.memory.used),
                wired: scaled(snapshot.memory.wired),
            },
            swap: UsageSection {
                free: scaled(snapshot.swap.free),
                total: scaled(snapshot.swap.total),
                used: scaled(snapshot.swap.used),
            },
            total: show_total.then(|| UsageSection {
                free: scaled(snapshot.totals.free),
                total: scaled(snapshot.totals.total),
                used: scaled(snapshot.totals.used),
            }),
        }
    }
}

/// Render one snapshot as a string, without a trailing newline.
pub fn render(snapshot: &Snapshot, settings: &ReportSettings) -> Result<String> {
    let report = Report::new(snapshot, &settings.unit, settings.show_total);
    match settings.mode {
        OutputMode::Text => Ok(render_text(&report)),
        OutputMode::Json => render_json(&report),
        OutputMode::Yaml => render_yaml(&report),
    }
}

fn render_text(report: &Report) -> String {
    let mem = &report.memory;
    let swap = &report.swap;
    let mut lines = vec![
        format!(
            "  {:>18} {:>11} {:>11} {:>11} {:>11} {:>11} {:>11}",
            "total", "used", "free", "active", "inactive", "wired", "available"
        ),
        format!(
            "Mem:     {:>11} {:>11} {:>11} {:>11} {:>11} {:>11} {:>11}",
            mem.total, mem.used, mem.free, mem.active, mem.inactive, mem.wired, mem.available
        ),
        format!("Swap:    {:>11} {:>11} {:>11}", swap.total, swap.used, swap.free),
    ];
    if let Some(total) = &report.total {
        lines.push(format!("Total: {:>13} {:>11} {:>11}", total.total, total.used, total.free));
    }
    lines.join("\n")
}

fn render_json(report: &Report) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    report.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn render_yaml(report: &Report) -> Result<String> {
    let text = serde_yaml::to_string(report)?;
    Ok(text.trim_end().to_string())
}
