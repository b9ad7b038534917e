//! Configuration section definitions.
//!
//! Each module corresponds to a section in `gitlaunch.toml`:
//!
//! | Module   | TOML Section | Purpose                                 |
//! |----------|--------------|-----------------------------------------|
//! | `deploy` | `[deploy]`   | Hosting service reminder, expected files|
//! | `git`    | `[git]`      | Executable, branch, remote, message     |

mod deploy;
mod git;

pub use deploy::DeployConfig;
pub use git::GitConfig;
