//! hubwatch
//!
//! Offline checker for messaging hub checkpoints. Evaluates fraud predicates
//! over a challenge file and builds message trees and inclusion proofs.

mod args;
mod build_tree;
mod check;
mod config;

use std::io::{self, IsTerminal, Write};

use anyhow::Context;
use args::{Args, Command, EnvArgs};
use config::Settings;
use hubwatch_common::logging;
use serde::Serialize;
use tracing::*;

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();
    if let Err(e) = main_inner(args) {
        eprintln!("FATAL ERROR: {e:#}");

        return Err(e);
    }

    Ok(())
}

fn main_inner(args: Args) -> anyhow::Result<()> {
    let settings = Settings::from_args(&args)?;

    // Init the logging before we do anything else.
    init_logging(&settings);

    match &args.cmd {
        Command::Check(cmd) => {
            let local_domain = settings.local_domain()?;
            let input = check::ChallengeFile::load(&cmd.challenge)?;
            let report = check::run(&input, local_domain);
            print_json(&report)
        }
        Command::BuildTree(cmd) => {
            let leaves = build_tree::load_leaves(&cmd.leaves)?;
            let report = build_tree::run(leaves, cmd.proof)?;
            print_json(&report)
        }
    }
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value).context("write output")?;
    writeln!(out).context("write output")?;
    Ok(())
}

/// Sets up the logging system from the merged settings and environment.
fn init_logging(settings: &Settings) {
    let env_args = EnvArgs::from_env();
    let lcfg = &settings.logging;

    let label = env_args.service_label.as_deref().or(lcfg.service_label.as_deref());
    let service_name = logging::format_service_name("hubwatch", label);

    let mut lconfig = logging::LoggerConfig::new(service_name)
        .with_json_logging(lcfg.json_format)
        .with_ansi(io::stderr().is_terminal());

    let file_logging_config = env_args
        .log_dir
        .or_else(|| lcfg.log_dir.clone())
        .map(|dir| logging::FileLoggingConfig::new(dir, lcfg.log_file_prefix.clone()));
    if let Some(file_config) = &file_logging_config {
        lconfig = lconfig.with_file_logging(file_config.clone());
    }

    logging::init(lconfig);

    if let Some(file_config) = &file_logging_config {
        info!(
            log_dir = %file_config.directory.display(),
            log_prefix = %file_config.file_name_prefix,
            "file logging enabled"
        );
    }
}
