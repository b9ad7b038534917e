#![allow(dead_code)]

use assert_cmd::Command;
use std::{
    fs,
    path::{Path, PathBuf},
    process,
};
use tempfile::TempDir;

/// A project folder to upload plus bare repositories standing in for GitHub.
pub struct World {
    pub root: TempDir,
}

impl World {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        let world = Self { root };

        fs::create_dir_all(world.project()).expect("Failed to create project dir");
        fs::create_dir_all(world.home()).expect("Failed to create home dir");
        fs::write(
            world.project().join("app.py"),
            "import streamlit as st\n\nst.title(\"Risk Assessment\")\n",
        )
        .expect("Failed to write app.py");
        fs::write(world.project().join("requirements.txt"), "streamlit\n")
            .expect("Failed to write requirements.txt");

        world
    }

    pub fn project(&self) -> PathBuf {
        self.root.path().join("project")
    }

    fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    /// Create an empty bare repository and return its path as the "URL".
    pub fn bare_remote(&self, name: &str) -> String {
        let path = self.root.path().join(format!("{name}.git"));
        let status = self
            .git_command(self.root.path())
            .args(["init", "--bare", "--quiet"])
            .arg(&path)
            .status()
            .expect("Failed to run git init --bare");
        assert!(status.success());
        path.display().to_string()
    }

    /// gitlaunch run inside the project folder with an isolated git setup.
    pub fn gitlaunch(&self) -> Command {
        let mut cmd = Command::cargo_bin("gitlaunch").expect("binary should build");
        cmd.current_dir(self.project())
            .args(["--color", "never"])
            .envs(self.git_env());
        cmd
    }

    /// Run git in `dir` and return trimmed stdout, or `None` on failure.
    pub fn git(&self, dir: &Path, args: &[&str]) -> Option<String> {
        let output = self
            .git_command(dir)
            .args(args)
            .output()
            .expect("Failed to run git");
        output
            .status
            .success()
            .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn git_command(&self, dir: &Path) -> process::Command {
        let mut cmd = process::Command::new("git");
        cmd.current_dir(dir).envs(self.git_env());
        cmd
    }

    fn git_env(&self) -> Vec<(&'static str, String)> {
        vec![
            ("HOME", self.home().display().to_string()),
            ("XDG_CONFIG_HOME", self.home().display().to_string()),
            ("GIT_CONFIG_NOSYSTEM", "1".to_string()),
            ("GIT_TERMINAL_PROMPT", "0".to_string()),
            ("GIT_AUTHOR_NAME", "Test User".to_string()),
            ("GIT_AUTHOR_EMAIL", "test@example.com".to_string()),
            ("GIT_COMMITTER_NAME", "Test User".to_string()),
            ("GIT_COMMITTER_EMAIL", "test@example.com".to_string()),
        ]
    }
}

/// Integration tests need a real git; skip quietly when it is missing.
pub fn git_available() -> bool {
    let found = which::which("git").is_ok();
    if !found {
        eprintln!("git not found in PATH, skipping");
    }
    found
}
