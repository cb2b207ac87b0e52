//! Turns rates into printable rows.

use super::{alias::AliasTable, rates::DeviceRate, rates::UnitMode};
use crate::utils::conversion::{bytes_per_second_string, ops_per_second_string};

/// A rate as a printable value and its unit label, e.g. `("12", "MB/s")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedRate {
    pub value: String,
    pub unit: &'static str,
}

impl FormattedRate {
    pub fn new(rate: f64, mode: UnitMode, use_binary_prefix: bool) -> Self {
        let (value, unit) = match mode {
            UnitMode::Bytes => bytes_per_second_string(rate, use_binary_prefix),
            UnitMode::Ops => ops_per_second_string(rate),
        };

        Self { value, unit }
    }
}

impl std::fmt::Display for FormattedRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// One line of disk output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskIoRow {
    pub display_name: String,
    pub read: FormattedRate,
    pub write: FormattedRate,
}

/// Formats each rate into a row, keeping the input order. Each rate is
/// formatted with its own unit mode.
pub fn build_rows(rates: &[DeviceRate], aliases: &AliasTable, use_binary_prefix: bool) -> Vec<DiskIoRow> {
    rates
        .iter()
        .map(|rate| DiskIoRow {
            display_name: aliases.display_name(&rate.name).to_string(),
            read: FormattedRate::new(rate.read_rate, rate.unit_mode, use_binary_prefix),
            write: FormattedRate::new(rate.write_rate, rate.unit_mode, use_binary_prefix),
        })
        .collect()
}
