//! Git step planning and execution.
//!
//! The upload is a fixed list of git invocations. `plan` builds the list,
//! an [`Executor`] runs each entry, and nothing in between looks at the
//! results to decide what runs next.

mod runner;

pub use runner::{Executor, ProcessExecutor, StepOutcome};

use crate::{config::GitConfig, utils::exec::Cmd};
use std::{
    ffi::{OsStr, OsString},
    fmt,
    path::Path,
};

/// Which step sequence to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flow {
    /// init, add, commit, rename branch, replace remote, push
    #[default]
    Commit,
    /// init, rename branch, replace remote, push (no add/commit)
    Relink,
}

/// One planned git invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitStep {
    /// Short name used in logs and the summary.
    pub label: &'static str,
    /// Arguments after the program name.
    pub args: Vec<OsString>,
    /// Discard stderr (the remote may not exist yet).
    pub quiet: bool,
}

impl GitStep {
    fn new<I, S>(label: &'static str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Self {
            label,
            args: args
                .into_iter()
                .map(|arg| arg.as_ref().to_owned())
                .collect(),
            quiet: false,
        }
    }

    fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Build the command for this step.
    pub fn to_cmd(&self, program: &str, cwd: &Path) -> Cmd {
        Cmd::new(program)
            .args(&self.args)
            .cwd(cwd)
            .quiet(self.quiet)
    }
}

impl fmt::Display for GitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Build the ordered step list for `flow`.
///
/// `url` is inserted verbatim, even when empty or not UTF-8.
pub fn plan(flow: Flow, git: &GitConfig, url: &OsStr) -> Vec<GitStep> {
    let remote = OsStr::new(&git.remote);
    let branch = OsStr::new(&git.branch);

    let mut steps = vec![GitStep::new("init", ["init"])];

    if flow == Flow::Commit {
        steps.push(GitStep::new("add", ["add", "."]));
        steps.push(GitStep::new("commit", ["commit", "-m", git.message.as_str()]));
    }

    steps.push(GitStep::new("branch", [OsStr::new("branch"), OsStr::new("-M"), branch]));
    steps.push(
        GitStep::new("remote remove", [OsStr::new("remote"), OsStr::new("remove"), remote]).quiet(),
    );
    steps.push(GitStep::new(
        "remote add",
        [OsStr::new("remote"), OsStr::new("add"), remote, url],
    ));
    steps.push(GitStep::new("push", [OsStr::new("push"), OsStr::new("-u"), remote, branch]));

    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(steps: &[GitStep]) -> Vec<Vec<&str>> {
        steps
            .iter()
            .map(|s| s.args.iter().map(|a| a.to_str().unwrap()).collect())
            .collect()
    }

    #[test]
    fn test_commit_flow_order() {
        let url = OsStr::new("https://github.com/u/r.git");
        let steps = plan(Flow::Commit, &GitConfig::default(), url);
        assert_eq!(
            args(&steps),
            vec![
                vec!["init"],
                vec!["add", "."],
                vec!["commit", "-m", "Initial commit"],
                vec!["branch", "-M", "main"],
                vec!["remote", "remove", "origin"],
                vec!["remote", "add", "origin", "https://github.com/u/r.git"],
                vec!["push", "-u", "origin", "main"],
            ]
        );
    }

    #[test]
    fn test_relink_flow_skips_commit() {
        let steps = plan(Flow::Relink, &GitConfig::default(), OsStr::new("u"));
        let labels: Vec<_> = steps.iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            vec!["init", "branch", "remote remove", "remote add", "push"]
        );
    }

    #[test]
    fn test_only_remote_remove_is_quiet() {
        let steps = plan(Flow::Commit, &GitConfig::default(), OsStr::new("u"));
        let quiet: Vec<_> = steps.iter().filter(|s| s.quiet).map(|s| s.label).collect();
        assert_eq!(quiet, vec!["remote remove"]);
    }

    #[test]
    fn test_empty_url_passed_through() {
        let steps = plan(Flow::Commit, &GitConfig::default(), OsStr::new(""));
        let add = steps.iter().find(|s| s.label == "remote add").unwrap();
        assert_eq!(add.args.len(), 4);
        assert_eq!(add.args[3], "");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_url_kept() {
        use std::os::unix::ffi::OsStrExt;

        let url = OsStr::from_bytes(b"https://github.com/u/r\xff.git");
        let steps = plan(Flow::Relink, &GitConfig::default(), url);
        let add = steps.iter().find(|s| s.label == "remote add").unwrap();
        assert_eq!(add.args[3].as_os_str(), url);
    }

    #[test]
    fn test_custom_names() {
        let git = GitConfig {
            branch: "trunk".to_string(),
            remote: "github".to_string(),
            message: "first upload".to_string(),
            ..Default::default()
        };
        let steps = plan(Flow::Commit, &git, OsStr::new("u"));
        let all = args(&steps);
        assert_eq!(all[2], vec!["commit", "-m", "first upload"]);
        assert_eq!(all[6], vec!["push", "-u", "github", "trunk"]);
    }

    #[test]
    fn test_to_cmd_renders() {
        let step = GitStep::new("commit", ["commit", "-m", "Initial commit"]);
        let cmd = step.to_cmd("git", Path::new("."));
        assert_eq!(cmd.to_string(), r#"git commit -m "Initial commit""#);
    }
}
