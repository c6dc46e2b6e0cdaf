//! Top-level error type and exit code mapping.

use thiserror::Error;

use crate::args::ParseError;
use crate::launch::{InvokeError, ResolveError};

/// Everything that can end a run early.
#[derive(Debug, Error)]
pub enum AskpwError {
    #[error("Unable to parse command line: {0}")]
    Parse(#[from] ParseError),

    #[error("Invalid password entry: {0}")]
    Prompt(#[source] std::io::Error),

    #[error("Invalid manager command: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Password manager error: {0}")]
    Invoke(#[from] InvokeError),
}

impl AskpwError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AskpwError::Invoke(_) => 1,
            AskpwError::Prompt(_) => 3,
            AskpwError::Resolve(_) => 4,
            AskpwError::Parse(_) => 9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn exit_codes() {
        let parse = AskpwError::from(ParseError {
            message: "bad".into(),
        });
        let prompt = AskpwError::Prompt(io::Error::from(io::ErrorKind::UnexpectedEof));
        let resolve = AskpwError::from(ResolveError {
            name: "pwsafe".into(),
        });
        let invoke = AskpwError::from(InvokeError {
            path: PathBuf::from("/usr/bin/pwsafe"),
        });

        assert_eq!(parse.exit_code(), 9);
        assert_eq!(prompt.exit_code(), 3);
        assert_eq!(resolve.exit_code(), 4);
        assert_eq!(invoke.exit_code(), 1);
    }

    #[test]
    fn messages_carry_prefix_and_cause() {
        let err = AskpwError::from(ResolveError {
            name: "/nonexistent/prog".into(),
        });
        assert_eq!(
            err.to_string(),
            "Invalid manager command: Unable to resolve /nonexistent/prog"
        );
    }
}
