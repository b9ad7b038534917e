//! Readiness hints printed before the upload.
//!
//! Purely informational: nothing here stops or alters the git steps.

use std::{
    io::{self, Write},
    path::Path,
};

use crate::{config::LaunchConfig, logger};

/// A problem worth mentioning before the upload starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    /// The upload directory does not exist.
    MissingDir,
    /// The git program was not found on PATH.
    MissingProgram(String),
    /// The hosting service's entry file is absent.
    MissingEntry(String),
    /// The dependency manifest is absent.
    MissingRequirements(String),
}

impl Hint {
    fn message(&self) -> String {
        match self {
            Self::MissingDir => "upload directory does not exist".to_string(),
            Self::MissingProgram(program) => {
                format!("`{program}` not found in PATH, every git step will fail")
            }
            Self::MissingEntry(entry) => {
                format!("{entry} not found, the hosting service needs it as the main file")
            }
            Self::MissingRequirements(file) => {
                format!("{file} not found, dependencies will not be installed on deploy")
            }
        }
    }
}

/// Collect readiness hints for `config`.
pub fn collect_hints(config: &LaunchConfig) -> Vec<Hint> {
    let root = config.get_root();
    let mut hints = Vec::new();

    if !root.is_dir() {
        hints.push(Hint::MissingDir);
    }

    if !program_available(&config.git.program, root) {
        hints.push(Hint::MissingProgram(config.git.program.clone()));
    }

    let deploy = &config.deploy;
    if !config.root_join(&deploy.entry).is_file() {
        hints.push(Hint::MissingEntry(deploy.entry.display().to_string()));
    }
    if !config.root_join(&deploy.requirements).is_file() {
        hints.push(Hint::MissingRequirements(
            deploy.requirements.display().to_string(),
        ));
    }

    hints
}

/// Write every hint to `out` under the `check` prefix.
pub fn write_hints(out: &mut impl Write, hints: &[Hint]) -> io::Result<()> {
    for hint in hints {
        logger::write_line(out, "check", &hint.message())?;
    }
    Ok(())
}

/// Resolve `program` the way the OS will when spawning it from `cwd`.
fn program_available(program: &str, cwd: &Path) -> bool {
    let path = Path::new(program);
    if path.components().count() > 1 {
        return cwd.join(path).is_file();
    }
    which::which(program).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_for(dir: &Path) -> LaunchConfig {
        LaunchConfig {
            root: dir.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_files_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_for(dir.path());
        config.git.program = "gitlaunch-no-such-git".to_string();

        let hints = collect_hints(&config);
        assert_eq!(
            hints,
            vec![
                Hint::MissingProgram("gitlaunch-no-such-git".to_string()),
                Hint::MissingEntry("app.py".to_string()),
                Hint::MissingRequirements("requirements.txt".to_string()),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_ready_project_has_no_hints() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.py"), "import streamlit as st\n").unwrap();
        fs::write(dir.path().join("requirements.txt"), "streamlit\n").unwrap();
        let mut config = config_for(dir.path());
        // `sh` is always on PATH on unix
        config.git.program = "sh".to_string();

        assert!(collect_hints(&config).is_empty());
    }

    #[test]
    fn test_hints_written_with_prefix() {
        owo_colors::set_override(false);
        let hints = [
            Hint::MissingDir,
            Hint::MissingEntry("app.py".to_string()),
        ];
        let mut out = Vec::new();
        write_hints(&mut out, &hints).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[check] upload directory does not exist\n\
             [check] app.py not found, the hosting service needs it as the main file\n"
        );
    }

    #[test]
    fn test_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(&dir.path().join("gone"));
        assert!(collect_hints(&config).contains(&Hint::MissingDir));
    }

    #[test]
    fn test_relative_program_path_resolved_from_cwd() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("bin")).unwrap();
        fs::write(dir.path().join("bin").join("git"), "").unwrap();

        assert!(program_available("bin/git", dir.path()));
        assert!(!program_available("bin/other", dir.path()));
    }
}
