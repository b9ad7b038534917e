//! `[git]` section configuration.
//!
//! Controls which executable is invoked and the names it is given.
//!
//! # Example
//!
//! ```toml
//! [git]
//! program = "git"              # Executable to invoke (name on PATH or full path)
//! branch = "main"              # Branch the working tree is renamed to and pushed
//! remote = "origin"            # Remote alias that gets replaced
//! message = "Initial commit"   # Commit message
//! ```

use serde::{Deserialize, Serialize};

/// Git invocation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Executable to invoke.
    pub program: String,

    /// Branch name passed to `branch -M` and `push -u`.
    pub branch: String,

    /// Remote alias removed and re-added on every run.
    pub remote: String,

    /// Commit message for the `commit` step.
    pub message: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            branch: "main".to_string(),
            remote: "origin".to_string(),
            message: "Initial commit".to_string(),
        }
    }
}

impl GitConfig {
    /// Collect validation errors.
    ///
    /// # Checks
    /// - `program`, `branch`, `remote` and `message` must not be blank.
    pub fn validate(&self, errors: &mut Vec<String>) {
        let fields = [
            ("git.program", &self.program),
            ("git.branch", &self.branch),
            ("git.remote", &self.remote),
            ("git.message", &self.message),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                errors.push(format!("{field} must not be empty"));
            }
        }
    }
}
