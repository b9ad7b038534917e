//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::{ffi::OsString, path::PathBuf};

use crate::git::Flow;

/// Upload a project folder to a new GitHub repository, then deploy it.
///
/// Run without flags for the interactive walkthrough: read the
/// instructions, paste the repository URL, and every git step runs in turn.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Directory to upload (default: current directory)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub dir: Option<PathBuf>,

    /// Remote repository URL; skips the interactive prompt
    #[arg(short, long, value_hint = clap::ValueHint::Url)]
    pub url: Option<OsString>,

    /// Commit message (default: "Initial commit")
    #[arg(short, long)]
    pub message: Option<String>,

    /// Branch to rename to and push (default: main)
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Remote alias to replace (default: origin)
    #[arg(short, long)]
    pub remote: Option<String>,

    /// Skip `add` and `commit`: relink an already committed tree and push
    #[arg(long)]
    pub relink: bool,

    /// Print the git commands instead of running them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Do not wait for Enter before exiting
    #[arg(long)]
    pub no_pause: bool,

    /// Config file path (default: gitlaunch.toml)
    #[arg(short = 'C', long, default_value = "gitlaunch.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Which step sequence this run uses.
    pub const fn flow(&self) -> Flow {
        if self.relink { Flow::Relink } else { Flow::Commit }
    }
}
