// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use envstamp_domain::{DEFAULT_BUILD_DATE_KEY, DEFAULT_VERSION_KEY};

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "envstamp",
    version = crate::VERSION,
    about = "Stamp the build version and date into a KEY=VALUE configuration file"
)]
pub struct Args {
    /// Manifest declaring the project version (JSON, or YAML by extension)
    #[arg(
        long,
        default_value = "package.json",
        value_hint = ValueHint::FilePath,
        help_heading = "Inputs"
    )]
    pub manifest: PathBuf,

    /// Directory in which the source-control revision is queried
    #[arg(
        long,
        default_value = ".",
        value_hint = ValueHint::DirPath,
        help_heading = "Inputs"
    )]
    pub repo: PathBuf,

    /// Use this revision instead of asking git
    #[arg(long, env = "ENVSTAMP_REVISION", help_heading = "Inputs")]
    pub revision: Option<String>,

    /// Never append a revision suffix (wins over --revision)
    #[arg(long, help_heading = "Inputs")]
    pub no_revision: bool,

    /// Pin the build date (YYYY-MM-DD) instead of today's UTC date
    #[arg(long, env = "ENVSTAMP_BUILD_DATE", help_heading = "Inputs")]
    pub build_date: Option<String>,

    /// Configuration file to update; created when missing
    #[arg(
        short,
        long,
        default_value = ".env",
        value_hint = ValueHint::FilePath,
        help_heading = "Output"
    )]
    pub output: PathBuf,

    /// Key holding the composite version
    #[arg(long, default_value = DEFAULT_VERSION_KEY, help_heading = "Output")]
    pub version_key: String,

    /// Key holding the build date
    #[arg(long, default_value = DEFAULT_BUILD_DATE_KEY, help_heading = "Output")]
    pub date_key: String,

    /// Print the resulting file instead of writing it
    #[arg(long, help_heading = "Output")]
    pub dry_run: bool,

    /// Status output format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
