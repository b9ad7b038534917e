use anyhow::{Context, Result};
use std::{
    ffi::OsString,
    io::{BufRead, Write},
};

/// Prompt shown before reading the repository URL.
pub const URL_PROMPT: &str = "Paste the HTTPS URL of your new GitHub repository: ";

/// Prompt shown before exiting.
pub const PAUSE_PROMPT: &str = "Press Enter to exit...";

/// Ask for the remote URL and read one line.
///
/// Only the line terminator is removed. The bytes are not required to be
/// UTF-8; they reach git as typed. An empty line (or EOF) yields an empty
/// value, which is handed to git as-is.
pub fn read_remote_url(input: &mut impl BufRead, output: &mut impl Write) -> Result<OsString> {
    write!(output, "{URL_PROMPT}")?;
    output.flush()?;

    let mut line = Vec::new();
    input
        .read_until(b'\n', &mut line)
        .context("Failed to read repository URL from stdin")?;

    strip_line_ending(&mut line);
    Ok(bytes_to_os_string(line))
}

/// Wait for the user to acknowledge before exiting. EOF counts as Enter,
/// and whatever was typed is discarded unread.
pub fn pause(input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
    write!(output, "{PAUSE_PROMPT}")?;
    output.flush()?;

    let mut line = Vec::new();
    input
        .read_until(b'\n', &mut line)
        .context("Failed to read acknowledgment from stdin")?;
    writeln!(output)?;
    Ok(())
}

fn strip_line_ending(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    if line.last() == Some(&b'\r') {
        line.pop();
    }
}

#[cfg(unix)]
fn bytes_to_os_string(bytes: Vec<u8>) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(bytes)
}

#[cfg(not(unix))]
fn bytes_to_os_string(bytes: Vec<u8>) -> OsString {
    OsString::from(String::from_utf8_lossy(&bytes).into_owned())
}
