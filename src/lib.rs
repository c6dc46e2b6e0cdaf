//! askpw: ask for a password-manager entry and run the manager with it.
//!
//! The entry comes from `--entry=NAME`, the `ASKPW_ENTRY` environment
//! variable, or an interactive prompt, in that order. It is appended as the
//! last argument of the password manager (`pwsafe` by default), which then
//! owns the terminal until it exits.

pub mod args;
pub mod config;
pub mod dispatch;
pub mod entry;
pub mod error;
pub mod launch;
pub mod logging;
mod os_bytes;

pub use dispatch::{dispatch, Outcome, Terminal};
pub use error::AskpwError;
