//! How to handle config files and arguments.

pub mod args;
pub mod config;
mod error;

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

pub use args::{get_args, Args};
pub use config::Config;
pub use error::{OptionError, OptionResult};

use crate::{
    app::{
        alias::AliasTable,
        filter::{DiskFilter, Filter},
        rates::UnitMode,
        suppression::SuppressionConfig,
        App, AppConfigFields, DiskIoSettings,
    },
    constants::*,
};
use config::{diskio::PatternList, StringOrNum};

/// Returns the config path to use. If `override_config_path` is specified, then
/// we will use that. If not, then return the "default" config path, which is
/// `<SYSTEM CONFIG FOLDER>/diskmon/diskmon.toml`.
///
/// For more details on this, see [dirs](https://docs.rs/dirs/latest/dirs/fn.config_dir.html)'
/// documentation.
pub fn get_config_path(override_config_path: Option<&Path>) -> Option<PathBuf> {
    match override_config_path {
        Some(conf_loc) => Some(conf_loc.to_path_buf()),
        None => dirs::config_dir().map(|path| path.join(DEFAULT_CONFIG_FILE_LOCATION)),
    }
}

/// Get the config at `config_path`. If there is no config file at the specified
/// path, it will try to create a new file with the default settings, and return
/// the default config.
pub fn get_or_create_config(config_path: Option<&Path>) -> OptionResult<Config> {
    match get_config_path(config_path) {
        Some(path) => {
            if path.exists() {
                let config_string = fs::read_to_string(&path).map_err(|err| {
                    OptionError::config(format!("unable to read '{}': {err}", path.display()))
                })?;
                Ok(toml_edit::de::from_str(&config_string)?)
            } else {
                if let Some(parent_path) = path.parent() {
                    fs::create_dir_all(parent_path)?;
                }

                fs::File::create(&path)?.write_all(CONFIG_TEXT.as_bytes())?;
                log::info!("created a default config file at {}", path.display());
                Ok(Config::default())
            }
        }
        None => {
            // If we somehow don't have any config path, then just assume the default config
            // but don't write to any file.
            Ok(Config::default())
        }
    }
}

/// Returns whether a boolean flag is set by either the arguments or the
/// `[flags]` section of the config.
macro_rules! is_flag_enabled {
    ($flag_name:ident, $args:expr, $config:expr) => {
        if $args.$flag_name {
            true
        } else if let Some(flags) = &$config.flags {
            flags.$flag_name.unwrap_or(false)
        } else {
            false
        }
    };
}

/// Builds the [`App`] from the arguments and config. Arguments win over the
/// config file.
pub fn init_app(args: &Args, config: &Config) -> OptionResult<App> {
    let app_config_fields = AppConfigFields {
        update_rate: get_update_rate(args, config)?,
        use_binary_prefix: is_flag_enabled!(binary_prefix, args.diskio_args, config),
        refresh_count: get_refresh_count(args, config),
    };

    let unit_mode = if is_flag_enabled!(iops, args.diskio_args, config) {
        UnitMode::Ops
    } else {
        UnitMode::Bytes
    };

    let settings = get_diskio_settings(args, config)?;

    Ok(App::new(app_config_fields, settings, unit_mode))
}

/// Parses a duration given either as milliseconds or as a human duration.
fn try_parse_ms(s: &str) -> Result<u64, ()> {
    if let Ok(val) = s.parse::<u64>() {
        Ok(val)
    } else if let Ok(val) = humantime::parse_duration(s) {
        Ok(val.as_millis().try_into().map_err(|_| ())?)
    } else {
        Err(())
    }
}

fn get_update_rate(args: &Args, config: &Config) -> OptionResult<Duration> {
    let update_rate = if let Some(rate) = &args.general_args.rate {
        try_parse_ms(rate).map_err(|_| OptionError::invalid_arg_value("rate"))?
    } else if let Some(rate) = config.flags.as_ref().and_then(|flags| flags.rate.as_ref()) {
        match rate {
            StringOrNum::String(s) => {
                try_parse_ms(s).map_err(|_| OptionError::invalid_config_value("rate"))?
            }
            StringOrNum::Num(n) => *n,
        }
    } else {
        DEFAULT_REFRESH_RATE_IN_MILLISECONDS
    };

    if update_rate < MIN_REFRESH_RATE_IN_MILLISECONDS {
        return Err(OptionError::other(format!(
            "set your update rate to be at least {MIN_REFRESH_RATE_IN_MILLISECONDS} ms."
        )));
    }

    Ok(Duration::from_millis(update_rate))
}

fn get_refresh_count(args: &Args, config: &Config) -> Option<u64> {
    args.general_args
        .count
        .or_else(|| config.flags.as_ref().and_then(|flags| flags.count))
        .filter(|&count| count > 0)
}

/// Compiles a pattern list from the config, naming the bad pattern on failure.
fn get_filter(key: &str, list: Option<&PatternList>) -> OptionResult<Option<Filter>> {
    let Some(list) = list else {
        return Ok(None);
    };

    let patterns = list.patterns();
    if let Some(position) = patterns.iter().position(|p| p.is_empty()) {
        return Err(OptionError::config(format!(
            "'{key}' has an empty pattern at position {}.",
            position + 1
        )));
    }

    for pattern in &patterns {
        if let Err(err) = Filter::new(&[pattern]) {
            return Err(OptionError::invalid_pattern(key, pattern, &err));
        }
    }

    Filter::new(&patterns)
        .map(Some)
        .map_err(|err| OptionError::config(err.to_string()))
}

fn get_diskio_settings(args: &Args, config: &Config) -> OptionResult<DiskIoSettings> {
    let Some(diskio) = &config.diskio else {
        return Ok(DiskIoSettings {
            suppression: SuppressionConfig {
                hide_zero: args.diskio_args.hide_zero,
                hide_threshold_bytes: 0.0,
            },
            ..Default::default()
        });
    };

    let show = get_filter("show", diskio.show.as_ref())?;
    let hide = get_filter("hide", diskio.hide.as_ref())?;

    let hide_threshold_bytes = diskio.hide_threshold_bytes.unwrap_or(0.0);
    if !hide_threshold_bytes.is_finite() || hide_threshold_bytes < 0.0 {
        return Err(OptionError::invalid_config_value("hide_threshold_bytes"));
    }

    let aliases: AliasTable = diskio.alias.clone().unwrap_or_default().into_iter().collect();

    Ok(DiskIoSettings {
        filter: DiskFilter::new(show, hide),
        suppression: SuppressionConfig {
            hide_zero: args.diskio_args.hide_zero || diskio.hide_zero.unwrap_or(false),
            hide_threshold_bytes,
        },
        aliases,
    })
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::*;

    fn config(text: &str) -> Config {
        toml_edit::de::from_str(text).unwrap()
    }

    fn args(arg_list: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("diskmon").chain(arg_list.iter().copied())).unwrap()
    }

    #[test]
    fn default_settings() {
        let app = init_app(&args(&[]), &Config::default()).unwrap();

        assert_eq!(
            app.app_config_fields.update_rate,
            Duration::from_millis(DEFAULT_REFRESH_RATE_IN_MILLISECONDS)
        );
        assert!(!app.app_config_fields.use_binary_prefix);
        assert!(app.app_config_fields.refresh_count.is_none());
        assert_eq!(app.unit_mode(), UnitMode::Bytes);
    }

    #[test]
    fn args_override_config() {
        let config = config(
            r#"
            [flags]
            rate = "5s"
            count = 10
            "#,
        );

        let app = init_app(&args(&["-r", "500", "-n", "2", "--iops"]), &config).unwrap();
        assert_eq!(app.app_config_fields.update_rate, Duration::from_millis(500));
        assert_eq!(app.app_config_fields.refresh_count, Some(2));
        assert_eq!(app.unit_mode(), UnitMode::Ops);

        let app = init_app(&args(&[]), &config).unwrap();
        assert_eq!(app.app_config_fields.update_rate, Duration::from_secs(5));
        assert_eq!(app.app_config_fields.refresh_count, Some(10));
    }

    #[test]
    fn zero_count_runs_forever() {
        let app = init_app(&args(&["-n", "0"]), &Config::default()).unwrap();
        assert!(app.app_config_fields.refresh_count.is_none());
    }

    #[test]
    fn rate_parsing() {
        assert_eq!(try_parse_ms("1000"), Ok(1000));
        assert_eq!(try_parse_ms("2s"), Ok(2000));
        assert_eq!(try_parse_ms("1m 30s"), Ok(90_000));
        assert!(try_parse_ms("soon").is_err());
    }

    #[test]
    fn rate_too_small() {
        let err = init_app(&args(&["-r", "100"]), &Config::default()).unwrap_err();
        assert!(err.to_string().contains("at least 250 ms"));
    }

    #[test]
    fn bad_rate() {
        let err = init_app(&args(&["-r", "soon"]), &Config::default()).unwrap_err();
        assert!(matches!(err, OptionError::Argument(_)));

        let err = init_app(&args(&[]), &config("[flags]\nrate = \"soon\"")).unwrap_err();
        assert!(matches!(err, OptionError::Config(_)));
    }

    #[test]
    fn bad_regex_is_a_config_error() {
        let err = init_app(&args(&[]), &config("[diskio]\nshow = [\"sda(\"]")).unwrap_err();

        assert!(matches!(err, OptionError::Config(_)));
        assert!(err.to_string().contains("'sda('"));
        assert!(err.to_string().contains("'show'"));
    }

    #[test]
    fn unbalanced_group_is_a_config_error() {
        let err = init_app(&args(&[]), &config("[diskio]\nhide = [\"sda)|(loop\"]")).unwrap_err();

        assert!(matches!(err, OptionError::Config(_)));
        assert!(err.to_string().contains("'sda)|(loop'"));
    }

    #[test]
    fn empty_pattern_is_a_config_error() {
        let err = init_app(&args(&[]), &config("[diskio]\nhide = \"loop.*,,ram.*\"")).unwrap_err();
        assert!(err.to_string().contains("position 2"));
    }

    #[test]
    fn negative_threshold_is_a_config_error() {
        let err = init_app(
            &args(&[]),
            &config("[diskio]\nhide_threshold_bytes = -1.0"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("hide_threshold_bytes"));
    }

    #[test]
    fn diskio_settings() {
        let config = config(
            r#"
            [diskio]
            show = "sd.*"
            hide = ["sdb.*"]
            hide_zero = true
            hide_threshold_bytes = 1024.0

            [diskio.alias]
            sda1 = "root-disk"
            "#,
        );

        let settings = get_diskio_settings(&args(&[]), &config).unwrap();
        assert!(settings.filter.is_visible("sda1"));
        assert!(!settings.filter.is_visible("sdb1"));
        assert!(!settings.filter.is_visible("nvme0n1"));
        assert_eq!(
            settings.suppression,
            SuppressionConfig {
                hide_zero: true,
                hide_threshold_bytes: 1024.0
            }
        );
        assert_eq!(settings.aliases.display_name("sda1"), "root-disk");
    }

    #[test]
    fn hide_zero_from_args() {
        let settings = get_diskio_settings(&args(&["--hide_zero"]), &Config::default()).unwrap();
        assert!(settings.suppression.hide_zero);

        let settings =
            get_diskio_settings(&args(&["--hide_zero"]), &config("[diskio]\nhide_zero = false"))
                .unwrap();
        assert!(settings.suppression.hide_zero);
    }

    #[test]
    fn creates_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("diskmon.toml");

        let config = get_or_create_config(Some(&path)).unwrap();
        assert!(config.flags.is_none());
        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEXT);

        // Reading it back gives the commented-out defaults.
        let config = get_or_create_config(Some(&path)).unwrap();
        assert!(config.flags.is_some());
    }

    #[test]
    fn unreadable_config_is_not_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diskmon.toml");
        let contents = b"# caf\xe9\n[flags]\nrate = 500\n";
        fs::write(&path, contents).unwrap();

        let err = get_or_create_config(Some(&path)).unwrap_err();
        assert!(matches!(err, OptionError::Config(_)));
        assert_eq!(fs::read(&path).unwrap(), contents);
    }

    #[test]
    fn invalid_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diskmon.toml");
        fs::write(&path, "[diskio]\nhide_zero = \"yes\"").unwrap();

        let err = get_or_create_config(Some(&path)).unwrap_err();
        assert!(matches!(err, OptionError::Config(_)));
    }
}
