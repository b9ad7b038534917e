//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for output that only appears with `--verbose`
//!
//! # Example
//!
//! ```ignore
//! log!("git"; "running `{}`", step);
//! debug!("config"; "loaded {}", path.display());
//! ```

use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use owo_colors::{OwoColorize, Stream};
use std::{
    io::{self, IsTerminal, Write, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
///
/// The line clear is only sent to a terminal; piped output stays plain.
#[inline]
pub fn log(module: &str, message: &str) {
    let mut stdout = stdout().lock();
    if stdout.is_terminal() {
        execute!(stdout, Clear(ClearType::UntilNewLine)).ok();
    }
    write_line(&mut stdout, module, message).ok();
}

/// Write one `[module] message` line to `out`.
pub fn write_line(out: &mut impl Write, module: &str, message: &str) -> io::Result<()> {
    let prefix = colorize_prefix(module, &module.to_ascii_lowercase());
    writeln!(out, "{prefix} {message}")?;
    out.flush()
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    let paint = |p: &String| match module_lower {
        "git" => p.bright_blue().bold().to_string(),
        "upload" => p.bright_green().bold().to_string(),
        "error" => p.bright_red().bold().to_string(),
        "warning" => p.bright_magenta().bold().to_string(),
        _ => p.bright_yellow().bold().to_string(),
    };
    prefix.if_supports_color(Stream::Stdout, paint).to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_keeps_module_name() {
        owo_colors::set_override(false);
        assert_eq!(colorize_prefix("git", "git"), "[git]");
        assert_eq!(colorize_prefix("Check", "check"), "[Check]");
    }

    #[test]
    fn test_write_line_is_plain_text() {
        owo_colors::set_override(false);
        let mut out = Vec::new();
        write_line(&mut out, "upload", "7 steps run").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[upload] 7 steps run\n");
    }

    #[test]
    fn test_verbose_toggle() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
