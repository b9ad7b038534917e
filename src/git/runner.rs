use super::GitStep;
use crate::{debug, log};
use std::{path::Path, process::ExitStatus};

/// Exit code used when a step could not be started at all.
const SPAWN_FAILED_CODE: i32 = 127;

/// What happened when a step was run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The process exited with this code.
    Exited(i32),
    /// The process was terminated by a signal.
    Signaled,
    /// The process could not be spawned.
    SpawnFailed(String),
}

impl StepOutcome {
    pub fn from_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => Self::Exited(code),
            None => Self::Signaled,
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Exited(0))
    }

    /// Process exit code this outcome maps to.
    pub const fn code(&self) -> i32 {
        match self {
            Self::Exited(code) => *code,
            Self::Signaled => 1,
            Self::SpawnFailed(_) => SPAWN_FAILED_CODE,
        }
    }
}

/// Runs one git step.
///
/// Implementations must not fail: every problem becomes a [`StepOutcome`].
pub trait Executor {
    fn execute(&mut self, step: &GitStep, cwd: &Path) -> StepOutcome;
}

/// Runs steps as real child processes attached to the terminal.
pub struct ProcessExecutor {
    program: String,
}

impl ProcessExecutor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Executor for ProcessExecutor {
    fn execute(&mut self, step: &GitStep, cwd: &Path) -> StepOutcome {
        let cmd = step.to_cmd(&self.program, cwd);
        log!("git"; "{cmd}");

        match cmd.status() {
            Ok(status) => {
                debug!("git"; "{} exited with {status}", step.label);
                StepOutcome::from_status(status)
            }
            Err(err) => {
                log!("error"; "{err:#}");
                StepOutcome::SpawnFailed(format!("{err:#}"))
            }
        }
    }
}
