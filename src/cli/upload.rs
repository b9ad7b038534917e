//! The upload walkthrough: instructions, URL prompt, git steps, deploy reminder.
//!
//! Control flow never depends on a step's result. Every planned step runs and
//! the closing banner is always printed; outcomes are only recorded so the
//! process can exit with the last step's code.
//!
//! Everything the walkthrough prints goes through the `output` writer. The
//! per-step `[git]` lines come from the [`Executor`], next to the output of
//! the git processes themselves, which always write to the real terminal.

use anyhow::Result;
use std::{
    ffi::OsString,
    io::{self, BufRead, Write},
};

use super::{
    Cli, banner,
    check::{collect_hints, write_hints},
    prompt::{pause, read_remote_url},
};
use crate::{
    config::LaunchConfig,
    git::{Executor, Flow, GitStep, StepOutcome, plan},
    log, logger,
};

/// Per-run switches, taken from the CLI.
#[derive(Debug, Clone, Default)]
pub struct UploadOptions {
    pub flow: Flow,
    /// Skip the prompt and use this URL.
    pub url: Option<OsString>,
    pub dry_run: bool,
    /// Wait for Enter before returning.
    pub pause: bool,
}

impl From<&Cli> for UploadOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            flow: cli.flow(),
            url: cli.url.clone(),
            dry_run: cli.dry_run,
            pause: !cli.no_pause,
        }
    }
}

/// What one run did.
#[derive(Debug, Clone)]
pub struct UploadReport {
    /// The URL exactly as it was handed to git.
    pub url: OsString,
    /// Every step that was run, in order. Empty for a dry run.
    pub results: Vec<(GitStep, StepOutcome)>,
}

impl UploadReport {
    /// Exit code of the last step run (0 when nothing ran).
    pub fn exit_code(&self) -> i32 {
        self.results.last().map_or(0, |(_, outcome)| outcome.code())
    }

    /// Failed steps, leaving out the quiet ones whose failure is expected.
    pub fn failures(&self) -> impl Iterator<Item = &(GitStep, StepOutcome)> {
        self.results
            .iter()
            .filter(|(step, outcome)| !step.quiet && !outcome.is_success())
    }
}

/// Run the whole walkthrough.
pub fn run_upload<R, W, E>(
    opts: &UploadOptions,
    config: &LaunchConfig,
    input: &mut R,
    output: &mut W,
    executor: &mut E,
) -> Result<UploadReport>
where
    R: BufRead,
    W: Write,
    E: Executor,
{
    banner::write_intro(output, opts.flow, &config.git)?;
    write_hints(output, &collect_hints(config))?;

    let url = match &opts.url {
        Some(url) => url.clone(),
        None => read_remote_url(input, output)?,
    };

    let steps = plan(opts.flow, &config.git, &url);
    let mut report = UploadReport {
        url,
        results: Vec::with_capacity(steps.len()),
    };

    if opts.dry_run {
        writeln!(output, "Dry run, these commands would run in {}:", config.get_root().display())?;
        for step in &steps {
            writeln!(output, "  $ {}", step.to_cmd(&config.git.program, config.get_root()))?;
        }
        output.flush()?;
    } else {
        for step in steps {
            let outcome = executor.execute(&step, config.get_root());
            report.results.push((step, outcome));
        }
        write_summary(output, &report)?;
    }

    banner::write_closing(output, &config.deploy, &config.git, &report.url)?;

    // The exit code belongs to the last git step, not to the pause
    if opts.pause {
        if let Err(err) = pause(input, output) {
            log!("warning"; "{err:#}");
        }
    }

    Ok(report)
}

fn write_summary(output: &mut impl Write, report: &UploadReport) -> io::Result<()> {
    let failures: Vec<String> = report
        .failures()
        .map(|(step, outcome)| match outcome {
            StepOutcome::Exited(code) => format!("{step} (exit {code})"),
            StepOutcome::Signaled => format!("{step} (killed)"),
            StepOutcome::SpawnFailed(_) => format!("{step} (not started)"),
        })
        .collect();

    let total = report.results.len();
    let message = if failures.is_empty() {
        format!("{total} steps run, all succeeded")
    } else {
        format!("{total} steps run, failed: {}", failures.join(", "))
    };
    logger::write_line(output, "upload", &message)
}
