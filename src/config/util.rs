//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Extract `owner/repo` from a repository URL for display
///
/// Uses `url` crate for parsing, so ports, auth info, query strings and
/// fragments are ignored. A trailing `.git` is dropped.
///
/// Returns `None` when the URL does not parse or has no path. This is only
/// used to make the closing banner friendlier; the URL handed to git is
/// never touched.
///
/// # Examples
/// ```ignore
/// repo_slug("https://github.com/user/project.git") -> Some("user/project")
/// repo_slug("https://github.com/user/project/")    -> Some("user/project")
/// repo_slug("https://github.com")                  -> None
/// repo_slug("not a url")                           -> None
/// ```
pub fn repo_slug(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str.trim()).ok()?;

    let path = parsed.path().trim_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);

    if path.is_empty() {
        None
    } else {
        Some(path.to_string())
    }
}

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Returns the path to the config file if found.
///
/// # Example
/// ```text
/// /home/user/project/pages/        ← start
/// /home/user/project/gitlaunch.toml ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================
