//! Console banners printed around the git steps.

use owo_colors::{OwoColorize, Stream};
use std::{
    ffi::OsStr,
    io::{self, Write},
};

use crate::config::{DeployConfig, GitConfig, repo_slug};
use crate::git::Flow;

const RULE: &str = "==================================================";

/// Marker line of the closing banner.
pub const COMPLETE_TITLE: &str = "Upload Complete!";

fn title(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "  {}",
        text.if_supports_color(Stream::Stdout, |t| t.bold())
    )?;
    writeln!(out, "{RULE}")?;
    writeln!(out)
}

/// Instructions shown before the URL prompt.
pub fn write_intro(out: &mut impl Write, flow: Flow, git: &GitConfig) -> io::Result<()> {
    title(out, "Upload to GitHub")?;

    writeln!(out, "Before you continue:")?;
    writeln!(out, "  1. Open https://github.com/new and sign in")?;
    writeln!(out, "  2. Create an empty repository")?;
    writeln!(out, "     (leave \"Add a README file\" unchecked)")?;
    writeln!(out, "  3. Copy the HTTPS URL from the quick setup box")?;
    writeln!(out, "     e.g. https://github.com/<user>/<repo>.git")?;
    writeln!(out)?;

    match flow {
        Flow::Commit => writeln!(
            out,
            "Every file in this folder will be committed as \"{}\" and pushed to `{}`.",
            git.message, git.branch
        )?,
        Flow::Relink => writeln!(
            out,
            "Existing commits will be pushed to `{}`; nothing new is committed.",
            git.branch
        )?,
    }
    writeln!(out)?;
    out.flush()
}

/// Deployment reminder shown after the last git step, whatever its result.
pub fn write_closing(
    out: &mut impl Write,
    deploy: &DeployConfig,
    git: &GitConfig,
    url: &OsStr,
) -> io::Result<()> {
    writeln!(out)?;
    title(out, COMPLETE_TITLE)?;

    let repo = repo_slug(&url.to_string_lossy())
        .unwrap_or_else(|| "the repository you just pushed".to_string());

    writeln!(out, "To deploy on {}:", deploy.service)?;
    writeln!(out, "  1. Go to {} and sign in with GitHub", deploy.url)?;
    writeln!(out, "  2. Create a new app from {repo}")?;
    writeln!(
        out,
        "  3. Branch: {}   Main file: {}",
        git.branch,
        deploy.entry.display()
    )?;
    writeln!(out, "  4. Click \"Deploy\"")?;
    writeln!(out)?;
    out.flush()
}
