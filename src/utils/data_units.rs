pub const KILO_LIMIT: u64 = 1000;
pub const MEGA_LIMIT: u64 = 1_000_000;
pub const GIGA_LIMIT: u64 = 1_000_000_000;
pub const TERA_LIMIT: u64 = 1_000_000_000_000;
pub const KIBI_LIMIT: u64 = 1024;
pub const MEBI_LIMIT: u64 = 1024 * 1024;
pub const GIBI_LIMIT: u64 = 1024 * 1024 * 1024;
pub const TEBI_LIMIT: u64 = 1024 * 1024 * 1024 * 1024;

pub const KILO_LIMIT_F64: f64 = 1000.0;
pub const MEGA_LIMIT_F64: f64 = 1_000_000.0;
pub const GIGA_LIMIT_F64: f64 = 1_000_000_000.0;
pub const TERA_LIMIT_F64: f64 = 1_000_000_000_000.0;
pub const KIBI_LIMIT_F64: f64 = 1024.0;
pub const MEBI_LIMIT_F64: f64 = 1024.0 * 1024.0;
pub const GIBI_LIMIT_F64: f64 = 1024.0 * 1024.0 * 1024.0;
pub const TEBI_LIMIT_F64: f64 = 1024.0 * 1024.0 * 1024.0 * 1024.0;

/// Returns a tuple containing the scaled value and the unit, per second. In
/// units of 1024. This only supports up to a tebi; anything larger stays in
/// TiB/s.
#[inline]
pub fn get_binary_bytes_per_second(bytes: f64) -> (f64, &'static str) {
    match bytes {
        b if b < KIBI_LIMIT_F64 => (bytes, "B/s"),
        b if b < MEBI_LIMIT_F64 => (bytes / KIBI_LIMIT_F64, "KiB/s"),
        b if b < GIBI_LIMIT_F64 => (bytes / MEBI_LIMIT_F64, "MiB/s"),
        b if b < TEBI_LIMIT_F64 => (bytes / GIBI_LIMIT_F64, "GiB/s"),
        _ => (bytes / TEBI_LIMIT_F64, "TiB/s"),
    }
}

/// Returns a tuple containing the scaled value and the unit, per second. In
/// units of 1000. This only supports up to a tera; anything larger stays in
/// TB/s.
#[inline]
pub fn get_decimal_bytes_per_second(bytes: f64) -> (f64, &'static str) {
    match bytes {
        b if b < KILO_LIMIT_F64 => (bytes, "B/s"),
        b if b < MEGA_LIMIT_F64 => (bytes / KILO_LIMIT_F64, "KB/s"),
        b if b < GIGA_LIMIT_F64 => (bytes / MEGA_LIMIT_F64, "MB/s"),
        b if b < TERA_LIMIT_F64 => (bytes / GIGA_LIMIT_F64, "GB/s"),
        _ => (bytes / TERA_LIMIT_F64, "TB/s"),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decimal_picks_largest_unit_at_least_one() {
        assert_eq!(get_decimal_bytes_per_second(0.0), (0.0, "B/s"));
        assert_eq!(get_decimal_bytes_per_second(999.0), (999.0, "B/s"));
        assert_eq!(get_decimal_bytes_per_second(1000.0), (1.0, "KB/s"));
        assert_eq!(get_decimal_bytes_per_second(2_500_000.0), (2.5, "MB/s"));
        assert_eq!(get_decimal_bytes_per_second(GIGA_LIMIT as f64), (1.0, "GB/s"));
        assert_eq!(
            get_decimal_bytes_per_second(3.0 * TERA_LIMIT as f64),
            (3.0, "TB/s")
        );
    }

    #[test]
    fn binary_picks_largest_unit_at_least_one() {
        assert_eq!(get_binary_bytes_per_second(1023.0), (1023.0, "B/s"));
        assert_eq!(get_binary_bytes_per_second(KIBI_LIMIT as f64), (1.0, "KiB/s"));
        assert_eq!(
            get_binary_bytes_per_second(1.5 * MEBI_LIMIT as f64),
            (1.5, "MiB/s")
        );
        assert_eq!(get_binary_bytes_per_second(GIBI_LIMIT as f64), (1.0, "GiB/s"));
        assert_eq!(get_binary_bytes_per_second(TEBI_LIMIT as f64), (1.0, "TiB/s"));
    }

    #[test]
    fn sub_byte_rates_stay_in_bytes() {
        assert_eq!(get_decimal_bytes_per_second(0.25), (0.25, "B/s"));
        assert_eq!(get_binary_bytes_per_second(0.25), (0.25, "B/s"));
    }
}
