//! Argument assembler — the final argv for the password manager.

use std::ffi::{OsStr, OsString};

/// Builder for CLI arguments passed to the spawned password manager.
#[derive(Debug, Clone, Default)]
pub struct ArgAssembler {
    args: Vec<OsString>,
}

impl ArgAssembler {
    /// Start with the pass-through tokens, in their original order.
    pub fn from_passthrough(passthrough: &[OsString]) -> Self {
        Self {
            args: passthrough.to_vec(),
        }
    }

    /// Append the entry. It must come last: the password manager reads it as
    /// its final positional argument.
    pub fn with_entry(mut self, entry: &OsStr) -> Self {
        self.args.push(entry.to_os_string());
        self
    }

    /// Build the final argument list.
    pub fn build(self) -> Vec<OsString> {
        self.args
    }
}
