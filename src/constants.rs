use indoc::indoc;

/// The default time between refreshes.
pub const DEFAULT_REFRESH_RATE_IN_MILLISECONDS: u64 = 1000;

/// Anything faster than this just produces noisy rates.
pub const MIN_REFRESH_RATE_IN_MILLISECONDS: u64 = 250;

/// How many refresh intervals the main thread waits for new data before
/// reporting the sampler as stalled.
pub const STALL_FACTOR: u32 = 3;

// Config and flags
pub const DEFAULT_CONFIG_FILE_LOCATION: &str = "diskmon/diskmon.toml";

/// Default text written to a new config file.
pub const CONFIG_TEXT: &str = indoc! {r#"
    # This is a default config file for diskmon. All of the settings are commented
    # out by default; if you wish to change them uncomment and modify as you see
    # fit.

    [flags]
    # Time between refreshes. Either milliseconds or a human duration like "2s".
    #rate = "1s"
    # Start in IOPS mode instead of showing throughput.
    #iops = false
    # Use binary prefixes (KiB/s, MiB/s) instead of decimal ones (KB/s, MB/s).
    #binary_prefix = false
    # Stop after this many refreshes. 0 means run until stopped.
    #count = 0

    [diskio]
    # Regexes for disks to show. Each must match the whole disk name.
    # Either a list or a comma-separated string.
    #show = ["sd.*", "nvme.*"]
    # Regexes for disks to hide. These win over "show".
    #hide = "loop.*,ram.*"
    # Hide disks with no activity.
    #hide_zero = false
    # With hide_zero, also hide disks whose combined read and write rate is at
    # or below this.
    #hide_threshold_bytes = 0

    # Display names for disks.
    #[diskio.alias]
    #sda1 = "root-disk"
"#};

#[cfg(test)]
mod test {
    use super::*;
    use crate::options::config::Config;

    /// This test exists because previously, [`CONFIG_TEXT`] was set incorrectly
    /// due to a bug.
    #[test]
    fn check_default_config_parses() {
        let config: Config = toml_edit::de::from_str(CONFIG_TEXT).unwrap();
        assert!(config.flags.is_some());
        assert!(config.diskio.is_some());
    }

    /// Uncommenting every setting should still give a valid config.
    #[test]
    fn check_uncommented_default_config_parses() {
        let uncommented = CONFIG_TEXT
            .lines()
            .filter(|line| !line.starts_with("# ") && *line != "#")
            .map(|line| line.strip_prefix('#').unwrap_or(line))
            .collect::<Vec<_>>()
            .join("\n");

        let config: Config = toml_edit::de::from_str(&uncommented).unwrap();
        let diskio = config.diskio.unwrap();
        assert!(diskio.hide_zero == Some(false));
        assert_eq!(diskio.alias.unwrap().get("sda1").unwrap(), "root-disk");
    }
}
