//! Unit scale selection
//!
//! Display values are raw byte counts divided by `base ^ exponent`, where
//! the base is 1024 for binary scales (KiB, MiB, ...) and 1000 for SI
//! scales (KB, MB, ...). The `--si` switch forces a base of 1000 on top of
//! whichever scale was selected, without touching its exponent or labels.

use std::fmt;

/// One display unit choice, resolved by the CLI layer before the core
/// sees anything. Exactly one scale is ever in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// Raw bytes, no scaling.
    Bytes,
    Kibi,
    Mebi,
    Gibi,
    Tebi,
    Pebi,
    Exbi,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
}

impl Default for Scale {
    fn default() -> Self {
        Scale::Kibi
    }
}

/// Resolved unit parameters used to scale and label a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSpec {
    /// 1024 for binary scales, 1000 for SI scales.
    pub base: u32,
    /// Power the base is raised to, 0 through 6.
    pub exponent: u32,
    /// Short unit label, e.g. "KiB".
    pub abbreviation: &'static str,
    /// Unit name prefix, e.g. "kibi"; empty for raw bytes.
    pub prefix: &'static str,
}

impl Scale {
    /// Look up the unit parameters for this scale.
    ///
    /// `si` forces a power-of-1000 base while keeping the exponent,
    /// abbreviation, and prefix of the selected scale. On a binary scale
    /// that leaves the labels reading as binary units over an SI divisor,
    /// matching the output contract of the classic tool.
    pub fn spec(self, si: bool) -> UnitSpec {
        let mut spec = match self {
            Scale::Bytes => UnitSpec { base: 1024, exponent: 0, abbreviation: "B", prefix: "" },
            Scale::Kibi => UnitSpec { base: 1024, exponent: 1, abbreviation: "KiB", prefix: "kibi" },
            Scale::Mebi => UnitSpec { base: 1024, exponent: 2, abbreviation: "MiB", prefix: "mebi" },
            Scale::Gibi => UnitSpec { base: 1024, exponent: 3, abbreviation: "GiB", prefix: "gibi" },
            Scale::Tebi => UnitSpec { base: 1024, exponent: 4, abbreviation: "TiB", prefix: "tebi" },
            Scale::Pebi => UnitSpec { base: 1024, exponent: 5, abbreviation: "PiB", prefix: "pebi" },
            Scale::Exbi => UnitSpec { base: 1024, exponent: 6, abbreviation: "EiB", prefix: "exbi" },
            Scale::Kilo => UnitSpec { base: 1000, exponent: 1, abbreviation: "KB", prefix: "kilo" },
            Scale::Mega => UnitSpec { base: 1000, exponent: 2, abbreviation: "MB", prefix: "mega" },
            Scale::Giga => UnitSpec { base: 1000, exponent: 3, abbreviation: "GB", prefix: "giga" },
            Scale::Tera => UnitSpec { base: 1000, exponent: 4, abbreviation: "TB", prefix: "tera" },
            Scale::Peta => UnitSpec { base: 1000, exponent: 5, abbreviation: "PB", prefix: "peta" },
            Scale::Exa => UnitSpec { base: 1000, exponent: 6, abbreviation: "EB", prefix: "exa" },
        };
        if si {
            spec.base = 1000;
        }
        spec
    }
}

impl UnitSpec {
    /// Integer divisor applied to every displayed byte count, computed as
    /// a floating-point power and truncated.
    pub fn divisor(&self) -> u64 {
        f64::from(self.base).powi(self.exponent as i32) as u64
    }

    /// Unit name used in structured output, e.g. "kibibytes". The bytes
    /// scale has an empty prefix and yields plain "bytes".
    pub fn descriptor(&self) -> String {
        format!("{}bytes", self.prefix)
    }
}

impl fmt::Display for UnitSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation)
    }
}
