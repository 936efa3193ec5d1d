use std::{env, path::PathBuf};

use argh::FromArgs;

/// Configs overridable by environment.
#[derive(Debug, Clone)]
pub(crate) struct EnvArgs {
    /// Service label to include in service name
    pub service_label: Option<String>,
    /// Directory for file logging
    pub log_dir: Option<PathBuf>,
}

impl EnvArgs {
    pub(crate) fn from_env() -> Self {
        Self {
            service_label: env::var("HUBWATCH_SVC_LABEL").ok(),
            log_dir: env::var_os("HUBWATCH_LOG_DIR").map(PathBuf::from),
        }
    }
}

#[derive(Debug, FromArgs)]
#[argh(description = "Checkpoint fraud-proof checker for messaging hub logs")]
pub(crate) struct Args {
    #[argh(option, short = 'c', description = "path to TOML config")]
    pub config: Option<PathBuf>,

    #[argh(
        option,
        short = 'd',
        description = "local domain id, overrides the config file"
    )]
    pub local_domain: Option<u32>,

    #[argh(switch, description = "emit logs as JSON")]
    pub json_logs: bool,

    #[argh(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, FromArgs)]
#[argh(subcommand)]
pub(crate) enum Command {
    Check(CheckArgs),
    BuildTree(BuildTreeArgs),
}

#[derive(Debug, FromArgs)]
#[argh(
    subcommand,
    name = "check",
    description = "run fraud predicates over a challenge file"
)]
pub(crate) struct CheckArgs {
    #[argh(positional, description = "challenge JSON file")]
    pub challenge: PathBuf,
}

#[derive(Debug, FromArgs)]
#[argh(
    subcommand,
    name = "build-tree",
    description = "build a message tree from a JSON list of message ids"
)]
pub(crate) struct BuildTreeArgs {
    #[argh(positional, description = "JSON file with an array of message ids")]
    pub leaves: PathBuf,

    #[argh(option, short = 'p', description = "leaf index to emit a proof for")]
    pub proof: Option<u32>,
}
