//! Flag registry — single source of truth for all flags.

use std::ffi::{OsStr, OsString};

use crate::os_bytes::os_string_from_vec;

/// Whether a flag takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagArity {
    /// Boolean flag, exact match only (e.g., --stderr, -2).
    NoValue,
    /// Inline value via `=` (e.g., --bin=PATH). Matched by prefix.
    InlineValue,
}

/// What a matched flag does to the parsed arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagEffect {
    ShowVersion,
    ShowHelp,
    ErrorPrompt,
    Bin,
    Entry,
}

/// A single flag definition.
#[derive(Debug, Clone)]
pub struct FlagDef {
    /// Long form without dashes (e.g., "bin").
    pub long: &'static str,
    /// Short form without the dash (e.g., "b").
    pub short: &'static str,
    /// Does it take a value?
    pub arity: FlagArity,
    /// What happens when it matches.
    pub effect: FlagEffect,
}

/// Build the flag registry, in match priority order.
pub fn flag_registry() -> Vec<FlagDef> {
    vec![
        FlagDef {
            long: "version",
            short: "v",
            arity: FlagArity::NoValue,
            effect: FlagEffect::ShowVersion,
        },
        // `-?` is checked before `-h`; both select help.
        FlagDef {
            long: "help",
            short: "?",
            arity: FlagArity::NoValue,
            effect: FlagEffect::ShowHelp,
        },
        FlagDef {
            long: "help",
            short: "h",
            arity: FlagArity::NoValue,
            effect: FlagEffect::ShowHelp,
        },
        FlagDef {
            long: "stderr",
            short: "2",
            arity: FlagArity::NoValue,
            effect: FlagEffect::ErrorPrompt,
        },
        FlagDef {
            long: "bin",
            short: "b",
            arity: FlagArity::InlineValue,
            effect: FlagEffect::Bin,
        },
        FlagDef {
            long: "entry",
            short: "e",
            arity: FlagArity::InlineValue,
            effect: FlagEffect::Entry,
        },
    ]
}

impl FlagDef {
    /// Check if this definition matches the given argument string.
    ///
    /// Valued flags match on prefix so `--bin=/usr/bin/pwsafe` and a bare `--bin`
    /// are both accepted without consuming the next token.
    ///
    /// Matching is on raw bytes, so tokens that are not UTF-8 still match.
    pub fn matches(&self, arg: &OsStr) -> bool {
        let arg = arg.as_encoded_bytes();
        let (long, short) = self.forms();
        let (long, short) = (long.as_bytes(), short.as_bytes());
        match self.arity {
            FlagArity::NoValue => arg == long || arg == short,
            FlagArity::InlineValue => arg.starts_with(long) || arg.starts_with(short),
        }
    }

    /// Value after the first `=`, if there is a non-empty one.
    pub fn extract_value(&self, arg: &OsStr) -> Option<OsString> {
        let bytes = arg.as_encoded_bytes();
        let split = bytes.iter().position(|&b| b == b'=')?;
        let value = &bytes[split + 1..];
        if value.is_empty() {
            return None;
        }
        Some(os_string_from_vec(value.to_vec()))
    }

    fn forms(&self) -> (String, String) {
        (format!("--{}", self.long), format!("-{}", self.short))
    }
}
