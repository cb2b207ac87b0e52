use std::{ffi::OsString, path::Path, process::Command};

pub fn abs_path(path: &str) -> OsString {
    let path = Path::new(path);

    if path.exists() {
        path.canonicalize().unwrap().into_os_string()
    } else {
        // We are going to trust that the path given is valid...
        path.to_owned().into_os_string()
    }
}

const DISKMON_EXE_PATH: &str = env!("CARGO_BIN_EXE_diskmon");
const DEFAULT_CFG: [&str; 2] = ["-C", "./tests/valid_configs/empty_config.toml"];

/// Returns the [`Command`] of a binary invocation of diskmon.
pub fn diskmon_command(args: &[&str]) -> Command {
    let mut cmd = Command::new(DISKMON_EXE_PATH);

    let mut prev = "";
    for arg in args.iter() {
        if prev == "-C" {
            // This is the config file; make sure we set it to absolute path!
            cmd.arg(abs_path(arg));
        } else {
            cmd.arg(arg);
        }

        prev = arg;
    }

    cmd
}

/// Returns the [`Command`] of a binary invocation of diskmon, with the default,
/// empty config file.
pub fn no_cfg_diskmon_command() -> Command {
    diskmon_command(&DEFAULT_CFG)
}
