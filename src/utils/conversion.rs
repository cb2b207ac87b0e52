//! This mainly concerns converting computed rates into strings that the canvas
//! can actually print.

use crate::utils::data_units::*;

/// Label used for rates in IOPS mode.
pub const IOPS_UNIT: &str = "IO/s";

/// Returns the scaled value string and unit for a rate in bytes per second.
///
/// If the value is at least a giga-unit, then it will keep one decimal place;
/// anything smaller is rounded to a whole number. The unit is picked after
/// rounding, so 999.7B/s is shown as 1KB/s rather than 1000B/s.
#[inline]
pub fn bytes_per_second_string(value: f64, use_binary_prefix: bool) -> (String, &'static str) {
    let (scale, step, giga): (fn(f64) -> (f64, &'static str), f64, f64) = if use_binary_prefix {
        (get_binary_bytes_per_second, KIBI_LIMIT_F64, GIBI_LIMIT_F64)
    } else {
        (get_decimal_bytes_per_second, KILO_LIMIT_F64, GIGA_LIMIT_F64)
    };
    let decimals = |bytes: f64| if bytes >= giga { 1 } else { 0 };

    let (scaled, unit) = scale(value);
    let rounded = round_to(scaled, decimals(value));

    if scaled < step && rounded >= step {
        // Rounded up into the next unit. The divisor is a power of the step,
        // so rounding it recovers the exact limit.
        let limit = (value / scaled).round() * step;
        let (scaled, unit) = scale(limit);
        let decimals = decimals(limit);

        (format!("{:.*}", decimals, round_to(scaled, decimals)), unit)
    } else {
        (format!("{:.*}", decimals(value), rounded), unit)
    }
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Returns the rate as a whole number of requests per second. No scaling is
/// applied.
#[inline]
pub fn ops_per_second_string(value: f64) -> (String, &'static str) {
    (format!("{:.0}", value.round()), IOPS_UNIT)
}
