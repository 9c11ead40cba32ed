use std::time::Duration;

use free::prelude::*;
use free::runner;
use free::stats::{MemoryCounters, SwapCounters};

/// Provider returning the same canned counters on every query.
struct FixedProvider(HostStats);

impl StatsProvider for FixedProvider {
    fn host_stats(&mut self) -> Result<HostStats> {
        Ok(self.0)
    }
}

fn fixed_provider() -> FixedProvider {
    FixedProvider(HostStats {
        memory: MemoryCounters {
            active: 4_194_304,
            available: 10_485_760,
            buffers: 1_048_576,
            cached: 2_097_152,
            free: 8_388_608,
            inactive: 2_097_152,
            shared: 524_288,
            total: 16_777_216,
            used: 8_388_608,
            wired: 0,
        },
        swap: SwapCounters { total: 2_097_152, free: 1_048_576 },
    })
}

fn settings(mode: OutputMode, show_total: bool) -> ReportSettings {
    ReportSettings { unit: Scale::Mebi.spec(false), mode, show_total }
}

fn run_once(mode: OutputMode, show_total: bool) -> String {
    let mut provider = fixed_provider();
    let mut buf = Vec::new();
    runner::run(RunMode::Once, &mut provider, &settings(mode, show_total), &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn text_report_end_to_end() {
    let output = run_once(OutputMode::Text, true);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);

    let mem: Vec<&str> = lines[1].split_whitespace().collect();
    // total, used, free, active, inactive, wired, available in MiB
    assert_eq!(mem, ["Mem:", "16", "8", "8", "4", "2", "0", "10"]);

    let swap: Vec<&str> = lines[2].split_whitespace().collect();
    assert_eq!(swap, ["Swap:", "2", "1", "1"]);

    let total: Vec<&str> = lines[3].split_whitespace().collect();
    assert_eq!(total, ["Total:", "18", "9", "9"]);
}

#[test]
fn json_report_end_to_end() {
    let output = run_once(OutputMode::Json, false);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["descriptor"], "mebibytes");
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["descriptor", "memory", "swap"]);

    assert_eq!(value["memory"]["available"], "10");
    assert_eq!(value["memory"]["buffers"], serde_json::Value::Null); // not part of the report shape
    assert_eq!(value["swap"]["used"], "1");
}

#[test]
fn yaml_report_matches_json_report() {
    let json = run_once(OutputMode::Json, true);
    let yaml = run_once(OutputMode::Yaml, true);

    let from_json: serde_json::Value = serde_json::from_str(&json).unwrap();
    let from_yaml: serde_json::Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(from_json, from_yaml);
    assert_eq!(from_yaml["total"]["total"], "18");
}

#[test]
fn repeat_schedule_separates_reports_with_blank_lines() {
    let mut provider = fixed_provider();
    let mut buf = Vec::new();
    let mode = RunMode::Repeat { interval: Duration::from_millis(1), count: 2 };
    runner::run(mode, &mut provider, &settings(OutputMode::Text, false), &mut buf).unwrap();

    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output.matches("Mem:").count(), 2);
    assert_eq!(output.matches("\n\n").count(), 1);
    assert!(!output.ends_with("\n\n"));
}

#[test]
fn count_without_interval_never_samples() {
    assert!(RunMode::from_schedule(0, 3).is_err());
}
