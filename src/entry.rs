//! Entry resolution: `--entry` override, then environment, then prompt.

use std::ffi::{OsStr, OsString};
use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::os_bytes::os_string_from_vec;

/// Where the resolved entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySource {
    Flag,
    Environment,
    Prompt,
}

/// Resolve the entry name.
///
/// A non-empty `override_entry` or `env_entry` is returned unchanged. Otherwise
/// `prompt` is written to `prompt_out` and one line is read from `input`. The
/// trimmed line may be empty, which callers treat as "nothing to do".
///
/// The prompt goes to `prompt_out` whatever `error_prompt` says; the flag is
/// only recorded.
pub fn resolve_entry<R: BufRead, W: Write>(
    override_entry: Option<&OsStr>,
    env_entry: Option<&OsStr>,
    error_prompt: bool,
    prompt: &str,
    input: &mut R,
    prompt_out: &mut W,
) -> io::Result<(OsString, EntrySource)> {
    if let Some(entry) = override_entry.filter(|e| !e.is_empty()) {
        debug!(?entry, "entry already defined by flag");
        return Ok((entry.to_os_string(), EntrySource::Flag));
    }

    if let Some(entry) = env_entry.filter(|e| !e.is_empty()) {
        debug!(?entry, "entry already defined by environment");
        return Ok((entry.to_os_string(), EntrySource::Environment));
    }

    debug!(error_prompt, "prompting for entry");
    prompt_out.write_all(prompt.as_bytes())?;
    prompt_out.flush()?;

    let entry = read_line(input)?;
    Ok((entry, EntrySource::Prompt))
}

/// Read one newline-terminated line and trim surrounding ASCII whitespace.
///
/// Input that ends before a newline is an error, even if some bytes arrived.
/// The remaining bytes are kept as they are, UTF-8 or not.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<OsString> {
    let mut buf = Vec::new();
    input.read_until(b'\n', &mut buf)?;

    if buf.last() != Some(&b'\n') {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before end of line",
        ));
    }

    Ok(os_string_from_vec(buf.trim_ascii().to_vec()))
}
