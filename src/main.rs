//! gitlaunch - upload a project folder to GitHub, then deploy it.

mod cli;
mod config;
mod git;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{
    Cli,
    upload::{UploadOptions, run_upload},
};
use config::LaunchConfig;
use git::ProcessExecutor;
use std::{io, process::ExitCode};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = LaunchConfig::load(&cli)?;
    let opts = UploadOptions::from(&cli);
    let mut executor = ProcessExecutor::new(config.git.program.clone());

    let mut input = io::stdin().lock();
    let mut output = io::stdout();
    let report = run_upload(&opts, &config, &mut input, &mut output, &mut executor)?;

    // Mirror the last git step's exit code; out-of-range codes become 1
    let code = u8::try_from(report.exit_code()).unwrap_or(1);
    Ok(ExitCode::from(code))
}
