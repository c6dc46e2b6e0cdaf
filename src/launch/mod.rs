//! Running the password manager: PATH lookup and stdio pass-through spawn.

mod invoke;
mod resolve;

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

pub use invoke::{invoke, InvokeError};
pub use resolve::{resolve, ResolveError};

/// Seam between the dispatcher and the operating system.
pub trait Launcher {
    /// Map a command name to an absolute executable path.
    fn resolve(&mut self, name: &OsStr) -> Result<PathBuf, ResolveError>;

    /// Run the executable with inherited stdio until it exits.
    fn invoke(&mut self, path: &Path, args: &[OsString]) -> Result<(), InvokeError>;
}

/// Launcher backed by PATH lookup and `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn resolve(&mut self, name: &OsStr) -> Result<PathBuf, ResolveError> {
        resolve(name)
    }

    fn invoke(&mut self, path: &Path, args: &[OsString]) -> Result<(), InvokeError> {
        invoke(path, args)
    }
}
