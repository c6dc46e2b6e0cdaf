//! Argument parser — raw tokens → parsed arguments.

use std::ffi::{OsStr, OsString};

use thiserror::Error;
use tracing::debug;

use crate::args::registry::{flag_registry, FlagDef, FlagEffect};

/// What the program should do after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    /// Resolve the entry and run the password manager.
    #[default]
    RunCommand,
    /// Print name and version, then exit.
    ShowVersion,
    /// Print usage, then exit.
    ShowHelp,
}

/// Result of parsing the command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedArguments {
    pub action: Action,
    /// `--stderr` was given.
    pub error_prompt: bool,
    /// Executable override; `None` means use the configured default.
    pub bin: Option<OsString>,
    /// Entry override; `None` falls back to environment, then prompt.
    pub entry: Option<OsString>,
    /// Tokens forwarded to the password manager, in order, byte for byte.
    pub passthrough: Vec<OsString>,
}

/// Malformed command line. Not produced by the current grammar.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
}

/// How the next token is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visitor {
    /// Match against the flag registry.
    Dispatching,
    /// After `--`: everything is pass-through.
    ForceForward,
    /// After version/help: everything is dropped.
    Discard,
}

/// Token-at-a-time parser state.
#[derive(Debug)]
pub struct Parser {
    registry: Vec<FlagDef>,
    visitor: Visitor,
    parsed: ParsedArguments,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            registry: flag_registry(),
            visitor: Visitor::Dispatching,
            parsed: ParsedArguments::default(),
        }
    }

    pub fn visitor(&self) -> Visitor {
        self.visitor
    }

    /// Feed a single token.
    pub fn visit(&mut self, arg: &OsStr) {
        match self.visitor {
            Visitor::Discard => {}
            Visitor::ForceForward => self.forward(arg),
            Visitor::Dispatching => self.dispatch(arg),
        }
    }

    pub fn finish(self) -> ParsedArguments {
        self.parsed
    }

    fn dispatch(&mut self, arg: &OsStr) {
        if arg == "--" {
            self.visitor = Visitor::ForceForward;
            return;
        }

        let Some(def) = self.registry.iter().find(|d| d.matches(arg)) else {
            self.forward(arg);
            return;
        };

        match def.effect {
            FlagEffect::ShowVersion => {
                debug!("displaying command version");
                self.parsed.action = Action::ShowVersion;
                self.visitor = Visitor::Discard;
            }
            FlagEffect::ShowHelp => {
                debug!("displaying usage message");
                self.parsed.action = Action::ShowHelp;
                self.visitor = Visitor::Discard;
            }
            FlagEffect::ErrorPrompt => {
                debug!("prompting on stderr");
                self.parsed.error_prompt = true;
            }
            FlagEffect::Bin => {
                debug!(?arg, "binary argument");
                replace(&mut self.parsed.bin, def.extract_value(arg));
            }
            FlagEffect::Entry => {
                debug!(?arg, "entry argument");
                replace(&mut self.parsed.entry, def.extract_value(arg));
            }
        }
    }

    fn forward(&mut self, arg: &OsStr) {
        debug!(?arg, "pass-through argument");
        self.parsed.passthrough.push(arg.to_os_string());
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Empty values leave the previous setting untouched.
fn replace(slot: &mut Option<OsString>, value: Option<OsString>) {
    if value.is_some() {
        *slot = value;
    }
}

/// Parse the command line (without the program name).
pub fn parse(raw_args: &[OsString]) -> Result<ParsedArguments, ParseError> {
    let mut parser = Parser::new();
    for arg in raw_args {
        parser.visit(arg);
    }
    Ok(parser.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_dispatching() {
        assert_eq!(Parser::new().visitor(), Visitor::Dispatching);
    }

    #[test]
    fn double_dash_switches_to_force_forward() {
        let mut parser = Parser::new();
        parser.visit(OsStr::new("--"));
        assert_eq!(parser.visitor(), Visitor::ForceForward);
        parser.visit(OsStr::new("--"));
        parser.visit(OsStr::new("-v"));
        let parsed = parser.finish();
        assert_eq!(parsed.action, Action::RunCommand);
        assert_eq!(parsed.passthrough, vec!["--", "-v"]);
    }

    #[test]
    fn help_switches_to_discard() {
        let mut parser = Parser::new();
        parser.visit(OsStr::new("-h"));
        assert_eq!(parser.visitor(), Visitor::Discard);
        for arg in ["--", "--entry=x", "extra"] {
            parser.visit(OsStr::new(arg));
        }
        let parsed = parser.finish();
        assert_eq!(parsed.action, Action::ShowHelp);
        assert!(parsed.entry.is_none());
        assert!(parsed.passthrough.is_empty());
    }

    #[test]
    fn empty_value_keeps_previous() {
        let mut slot: Option<OsString> = Some("pwsafe".into());
        replace(&mut slot, None);
        assert_eq!(slot, Some("pwsafe".into()));
        replace(&mut slot, Some("pass".into()));
        assert_eq!(slot, Some("pass".into()));
    }
}
