//! Configuration management for `gitlaunch.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── deploy     # [deploy]
//! │   └── git        # [git]
//! ├── error          # ConfigError
//! ├── util           # config file search, URL display helpers
//! └── mod.rs         # LaunchConfig (this file)
//! ```
//!
//! The file is optional. Without it every section takes its defaults.
//! Precedence: CLI flags > config file > defaults.

mod error;
pub mod section;
mod util;

pub use error::ConfigError;
pub use section::{DeployConfig, GitConfig};
pub use util::repo_slug;

use util::find_config_file;

use crate::{cli::Cli, debug, log};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing gitlaunch.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LaunchConfig {
    /// Directory being uploaded (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Git invocation settings
    #[serde(default)]
    pub git: GitConfig,

    /// Deployment reminder settings
    #[serde(default)]
    pub deploy: DeployConfig,
}

impl LaunchConfig {
    /// Load configuration from CLI arguments.
    ///
    /// The upload directory is `--dir` (default: cwd). The config file is
    /// searched upward from there; a missing file means defaults.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let root = match &cli.dir {
            Some(dir) => cwd.join(dir),
            None => cwd,
        };

        let mut config = match find_config_file(&root, &cli.config) {
            Some(path) => {
                debug!("config"; "loading {}", path.display());
                Self::from_path(&path)?
            }
            None => {
                debug!("config"; "no {} found, using defaults", cli.config.display());
                Self::default()
            }
        };

        config.root = root;
        config.apply_cli_options(cli);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    ///
    /// No confirmation prompt here: stdin is reserved for the URL.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            log!("warning"; "- {}", field);
        }
    }

    /// Apply CLI overrides on top of file values.
    fn apply_cli_options(&mut self, cli: &Cli) {
        if let Some(message) = &cli.message {
            self.git.message.clone_from(message);
        }
        if let Some(branch) = &cli.branch {
            self.git.branch.clone_from(branch);
        }
        if let Some(remote) = &cli.remote {
            self.git.remote.clone_from(remote);
        }
    }

    /// Validate all sections, joining every problem into one error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();
        self.git.validate(&mut errors);
        self.deploy.validate(&mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors.join("; ")))
        }
    }

    /// Get the upload directory
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the upload directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }
}

// ============================================================================
// tests
// ============================================================================
