// Argument parsing via clap.
//
// Note that you probably want to keep this as a single file so the build script doesn't
// trip all over itself.

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "diskmon [OPTIONS]";

/// The arguments for diskmon.
#[derive(Parser, Debug)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    about = crate_description!(),
    disable_help_flag = true,
    disable_version_flag = true,
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct Args {
    #[command(flatten)]
    pub(crate) general_args: GeneralArgs,

    #[command(flatten)]
    pub(crate) diskio_args: DiskIoArgs,

    #[command(flatten)]
    pub(crate) other_args: OtherArgs,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "General Options")]
pub(crate) struct GeneralArgs {
    #[arg(
        short = 'C',
        long = "config_location",
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    If it doesn't exist, a default config file is created at the path."
    )]
    pub(crate) config_location: Option<String>,

    #[arg(
        short = 'n',
        long,
        value_name = "COUNT",
        help = "Exits after this many refreshes.",
        long_help = "Exits after printing this many refreshes. A value of 0 means diskmon runs until it \
                    is stopped."
    )]
    pub(crate) count: Option<u64>,

    #[arg(
        short = 'r',
        long,
        value_name = "TIME",
        help = "Sets how often data is refreshed.",
        long_help = "Sets how often data is refreshed. Takes a number in milliseconds or a human \
                    duration (e.g. 5s). The minimum is 250ms, and defaults to 1s."
    )]
    pub(crate) rate: Option<String>,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Disk I/O Options")]
pub(crate) struct DiskIoArgs {
    #[arg(
        long = "binary_prefix",
        help = "Uses binary prefixes for throughput (e.g. KiB/s).",
        long_help = "Uses binary prefixes (KiB/s, MiB/s, ...) for throughput instead of decimal ones \
                    (KB/s, MB/s, ...)."
    )]
    pub(crate) binary_prefix: bool,

    #[arg(
        long = "hide_zero",
        help = "Hides disks with no I/O activity.",
        long_help = "Hides disks whose combined read and write rate is at or below the configured \
                    threshold, which defaults to 0."
    )]
    pub(crate) hide_zero: bool,

    #[arg(
        long,
        help = "Starts in IOPS mode.",
        long_help = "Shows I/O requests per second instead of throughput. In an interactive terminal, \
                    press 'i' to switch between the two."
    )]
    pub(crate) iops: bool,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Other Options")]
pub(crate) struct OtherArgs {
    #[arg(short = 'h', long, action = ArgAction::Help, help = "Prints help info (for more details use '--help'.)")]
    help: (),

    #[arg(short = 'V', long, action = ArgAction::Version, help = "Prints version information.")]
    version: (),
}

impl Args {
    /// The config file location given on the command line, if any.
    pub fn config_location(&self) -> Option<&std::path::Path> {
        self.general_args
            .config_location
            .as_deref()
            .map(std::path::Path::new)
    }
}

/// Returns a [`Command`] based off of [`Args`].
pub fn build_cmd() -> Command {
    Args::command()
}

/// Returns an [`Args`].
pub fn get_args() -> Args {
    Args::parse()
}
