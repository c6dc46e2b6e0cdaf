//! Main flow: parse → resolve entry → resolve binary → invoke.

use std::ffi::{OsStr, OsString};
use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::args::{parse, Action, ArgAssembler};
use crate::config::Config;
use crate::entry::resolve_entry;
use crate::error::AskpwError;
use crate::launch::Launcher;

/// The three stdio handles, in the order they are used.
pub struct Terminal<R, O, E> {
    pub input: R,
    pub output: O,
    pub error: E,
}

/// How a successful run ended. All of these exit with code 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Printed the version.
    Version,
    /// Printed the usage text.
    Help,
    /// No entry was given; nothing was run.
    Skipped,
    /// The password manager ran and exited successfully.
    Completed,
}

/// Usage text, naming the configured environment variable and default command.
pub fn usage(config: &Config) -> String {
    format!(
        "askpw [OPTION]...
Prompt for the entry key to read from a password manager.

    --bin=PATH              the absolute path to the invoked binary
    --entry=NAME            this will not ask for the entry via prompt
    --stderr                ask for the entry key on stderr
    --version               display the askpw version and exit
    --help                  display the usage/help message and exit
Alternatively the entry can also be set via the environment ({})
The default command is {}",
        config.entry_env, config.bin
    )
}

/// Run askpw once.
///
/// `env_entry` is the value of the configured entry variable, read by the
/// caller. Nothing is resolved or spawned unless an entry is available.
pub fn dispatch<R, O, E, L>(
    config: &Config,
    raw_args: &[OsString],
    env_entry: Option<&OsStr>,
    terminal: &mut Terminal<R, O, E>,
    launcher: &mut L,
) -> Result<Outcome, AskpwError>
where
    R: BufRead,
    O: Write,
    E: Write,
    L: Launcher,
{
    if raw_args.is_empty() {
        debug!("no arguments provided");
    }
    let args = parse(raw_args)?;

    match args.action {
        Action::ShowVersion => {
            if let Err(err) = writeln!(terminal.output, "askpw {}", config.version) {
                debug!(error = %err, "failed to write version");
            }
            return Ok(Outcome::Version);
        }
        Action::ShowHelp => {
            if let Err(err) = writeln!(terminal.output, "{}", usage(config)) {
                debug!(error = %err, "failed to write usage");
            }
            return Ok(Outcome::Help);
        }
        Action::RunCommand => {}
    }

    let (entry, source) = resolve_entry(
        args.entry.as_deref(),
        env_entry,
        args.error_prompt,
        &config.prompt,
        &mut terminal.input,
        &mut terminal.error,
    )
    .map_err(AskpwError::Prompt)?;

    if entry.is_empty() {
        debug!("empty entry name, aborting");
        return Ok(Outcome::Skipped);
    }
    debug!(?source, "entry resolved");

    let bin = args.bin.as_deref().unwrap_or(OsStr::new(&config.bin));
    let path = launcher.resolve(bin)?;

    let argv = ArgAssembler::from_passthrough(&args.passthrough)
        .with_entry(&entry)
        .build();
    info!(command = %path.display(), ?argv, "running password manager");
    launcher.invoke(&path, &argv)?;

    Ok(Outcome::Completed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_names_configured_defaults() {
        let config = Config {
            bin: "pass".into(),
            entry_env: "PASS_ENTRY".into(),
            ..Config::default()
        };
        let text = usage(&config);
        assert!(text.starts_with("askpw [OPTION]...\n"));
        assert!(text.contains("set via the environment (PASS_ENTRY)"));
        assert!(text.ends_with("The default command is pass"));
    }

    #[test]
    fn default_usage_mentions_pwsafe() {
        let text = usage(&Config::default());
        assert!(text.contains("(ASKPW_ENTRY)"));
        assert!(text.contains("    --bin=PATH              the absolute path"));
        assert!(text.ends_with("pwsafe"));
    }
}
