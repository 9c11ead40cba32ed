//! Command-line surface
//!
//! Flag parsing stays in this module; the rest of the crate only ever
//! sees the resolved values (one [`Scale`], one [`OutputMode`], one run
//! schedule). Several size flags at once is a tie-break by documented
//! priority, not an error.

use clap::Parser;

use crate::render::{OutputMode, ReportSettings};
use crate::units::Scale;

/// Report the amount of free and used memory in the system.
#[derive(Debug, Parser)]
#[command(name = "free", disable_version_flag = true)]
pub struct Cli {
    /// Show output in bytes.
    #[arg(short = 'b', long)]
    pub bytes: bool,

    /// Show output in kilobytes. Implies --si.
    #[arg(long)]
    pub kilo: bool,

    /// Show output in megabytes. Implies --si.
    #[arg(long)]
    pub mega: bool,

    /// Show output in gigabytes. Implies --si.
    #[arg(long)]
    pub giga: bool,

    /// Show output in terabytes. Implies --si.
    #[arg(long)]
    pub tera: bool,

    /// Show output in petabytes. Implies --si.
    #[arg(long)]
    pub peta: bool,

    /// Show output in exabytes. Implies --si.
    #[arg(long)]
    pub exa: bool,

    /// Show output in kibibytes.
    #[arg(short = 'k', long)]
    pub kibi: bool,

    /// Show output in mebibytes.
    #[arg(short = 'm', long)]
    pub mebi: bool,

    /// Show output in gibibytes.
    #[arg(short = 'g', long)]
    pub gibi: bool,

    /// Show output in tebibytes.
    #[arg(short = 't', long)]
    pub tebi: bool,

    /// Show output in pebibytes.
    #[arg(short = 'p', long)]
    pub pebi: bool,

    /// Show output in exbibytes.
    #[arg(short = 'e', long)]
    pub exbi: bool,

    /// Output the data as JSON.
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Output the data as YAML.
    #[arg(short = 'y', long)]
    pub yaml: bool,

    /// Use kilo, mega, giga, etc (power of 1000) instead of kibi, mebi,
    /// gibi (power of 1024).
    #[arg(long)]
    pub si: bool,

    /// Show total for RAM + swap.
    #[arg(long)]
    pub total: bool,

    /// Continuously display the result N seconds apart.
    #[arg(short = 's', long, value_name = "N", default_value_t = 0)]
    pub seconds: u64,

    /// Display the result N times. Requires --seconds.
    #[arg(short = 'c', long, value_name = "N", default_value_t = 0)]
    pub count: u64,

    /// Output version information and exit.
    #[arg(short = 'V', long)]
    pub version: bool,
}

impl Cli {
    /// Resolve the size flags to one scale. The first set flag in
    /// priority order wins; with none set the default is kibibytes.
    pub fn scale(&self) -> Scale {
        let ordered = [
            (self.bytes, Scale::Bytes),
            (self.kibi, Scale::Kibi),
            (self.mebi, Scale::Mebi),
            (self.gibi, Scale::Gibi),
            (self.tebi, Scale::Tebi),
            (self.pebi, Scale::Pebi),
            (self.exbi, Scale::Exbi),
            (self.kilo, Scale::Kilo),
            (self.mega, Scale::Mega),
            (self.giga, Scale::Giga),
            (self.tera, Scale::Tera),
            (self.peta, Scale::Peta),
            (self.exa, Scale::Exa),
        ];
        ordered
            .into_iter()
            .find_map(|(set, scale)| set.then_some(scale))
            .unwrap_or_default()
    }

    /// JSON takes precedence when both structured formats are requested.
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.yaml {
            OutputMode::Yaml
        } else {
            OutputMode::Text
        }
    }

    pub fn settings(&self) -> ReportSettings {
        ReportSettings {
            unit: self.scale().spec(self.si),
            mode: self.output_mode(),
            show_total: self.total,
        }
    }
}

/// The exact line printed for `--version`.
pub fn version_line() -> String {
    format!("free version {}", env!("CARGO_PKG_VERSION"))
}
