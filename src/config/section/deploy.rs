//! `[deploy]` section configuration.
//!
//! Describes the hosting service named in the closing banner, and the files
//! the readiness check looks for. Nothing here is contacted over the network.
//!
//! # Example
//!
//! ```toml
//! [deploy]
//! service = "Streamlit Community Cloud"   # Shown in the closing banner
//! url = "https://share.streamlit.io"      # Where to go after the push
//! entry = "app.py"                        # Main file the service should run
//! requirements = "requirements.txt"       # Dependency manifest the service installs
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Deployment reminder settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    /// Hosting service name.
    pub service: String,

    /// Dashboard URL of the hosting service.
    pub url: String,

    /// Entry file, relative to the uploaded directory.
    pub entry: PathBuf,

    /// Dependency manifest, relative to the uploaded directory.
    pub requirements: PathBuf,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            service: "Streamlit Community Cloud".to_string(),
            url: "https://share.streamlit.io".to_string(),
            entry: PathBuf::from("app.py"),
            requirements: PathBuf::from("requirements.txt"),
        }
    }
}

impl DeployConfig {
    /// Collect validation errors.
    ///
    /// # Checks
    /// - `entry` and `requirements` must be relative paths.
    pub fn validate(&self, errors: &mut Vec<String>) {
        if self.entry.is_absolute() {
            errors.push(format!(
                "deploy.entry must be relative to the upload directory: {}",
                self.entry.display()
            ));
        }
        if self.requirements.is_absolute() {
            errors.push(format!(
                "deploy.requirements must be relative to the upload directory: {}",
                self.requirements.display()
            ));
        }
    }
}
