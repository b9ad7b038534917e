//! Command-line interface module.

mod args;
pub mod banner;
pub mod check;
pub mod prompt;
pub mod upload;

pub use args::Cli;
