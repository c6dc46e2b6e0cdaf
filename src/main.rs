use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use askpw::config::Config;
use askpw::launch::SystemLauncher;
use askpw::logging::init_tracing;
use askpw::{dispatch, Terminal};

fn main() -> ExitCode {
    let config = Config::load().unwrap_or_else(|err| {
        eprintln!("Warning: {}", err);
        Config::default()
    });
    init_tracing(config.debug);

    let raw_args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let env_entry = std::env::var_os(&config.entry_env);

    let mut terminal = Terminal {
        input: io::stdin().lock(),
        output: io::stdout(),
        error: io::stderr(),
    };

    match dispatch(
        &config,
        &raw_args,
        env_entry.as_deref(),
        &mut terminal,
        &mut SystemLauncher,
    ) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
