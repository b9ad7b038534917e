//! External command execution utilities.
//!
//! Provides a Builder-based API for running commands that talk to the
//! terminal directly: stdin, stdout and stderr are inherited, so the child
//! can print progress and ask for credentials on its own.
//!
//! # Examples
//!
//! ```ignore
//! use crate::utils::exec::Cmd;
//!
//! // Simple command
//! Cmd::new("git").args(["status", "-s"]).status()?;
//!
//! // With working directory, stderr silenced
//! Cmd::new("git")
//!     .args(["remote", "remove", "origin"])
//!     .cwd(root)
//!     .quiet(true)
//!     .status()?;
//! ```

use anyhow::{Context, Result};
use std::{
    ffi::{OsStr, OsString},
    fmt,
    path::{Path, PathBuf},
    process::{Command, ExitStatus, Stdio},
};

// ============================================================================
// Builder API
// ============================================================================

/// Command builder for external process execution.
///
/// Unlike a shell, empty arguments are kept: `git remote add origin ""`
/// reaches git with the empty URL intact.
#[derive(Debug, Default)]
pub struct Cmd {
    program: OsString,
    args: Vec<OsString>,
    cwd: Option<PathBuf>,
    quiet: bool,
}

impl Cmd {
    /// Create a new command builder.
    pub fn new<S: AsRef<OsStr>>(program: S) -> Self {
        Self {
            program: program.as_ref().to_owned(),
            ..Default::default()
        }
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|arg| arg.as_ref().to_owned()));
        self
    }

    /// Set working directory.
    pub fn cwd<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.cwd = Some(dir.as_ref().to_owned());
        self
    }

    /// Discard the child's stderr instead of passing it through.
    pub fn quiet(mut self, enable: bool) -> Self {
        self.quiet = enable;
        self
    }

    /// Run the command attached to the terminal and wait for it.
    ///
    /// Only a spawn failure is an `Err`; a non-zero exit is returned as-is
    /// for the caller to record.
    pub fn status(self) -> Result<ExitStatus> {
        let name = self.program_name();
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit());

        if self.quiet {
            cmd.stderr(Stdio::null());
        } else {
            cmd.stderr(Stdio::inherit());
        }

        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }

        cmd.status()
            .with_context(|| format!("Failed to execute `{name}`"))
    }

    /// Get the program name for error messages.
    fn program_name(&self) -> String {
        self.program.to_string_lossy().to_string()
    }
}

/// Shell-like rendering, used for logs and dry runs.
///
/// Arguments that are empty or contain whitespace or quotes are wrapped
/// in double quotes.
impl fmt::Display for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", quote_arg(&arg.to_string_lossy()))?;
        }
        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn quote_arg(arg: &str) -> String {
    let needs_quotes =
        arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '"' || c == '\'');
    if needs_quotes {
        format!("\"{}\"", arg.replace('"', "\\\""))
    } else {
        arg.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================
