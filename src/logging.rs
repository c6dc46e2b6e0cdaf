use std::fs::File;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_PATH_ENV: &str = "ASKPW_LOG";

/// Initialize tracing.
///
/// Logging is off by default: stdio belongs to the password manager.
/// Set `ASKPW_LOG` to a file path to log there, or set `debug = true` in the
/// config to log debug events to stderr.
///
/// Log files get unique names so parallel runs don't clobber each other:
/// `{path}.{timestamp}.{pid}`
pub fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    let Some(log_path) = std::env::var(LOG_PATH_ENV).ok().filter(|p| !p.is_empty()) else {
        if debug {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        return;
    };

    let file = match create_log_file(&log_path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: {:#}", err);
            return;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter())
        .with(file_layer)
        .init();
}

fn create_log_file(log_path: &str) -> Result<File> {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    File::create(&unique_path).with_context(|| format!("failed to create log file {}", unique_path))
}

#[cfg(test)]
mod tests {
    use super::create_log_file;

    #[test]
    fn log_file_name_is_unique_per_process() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("askpw.log");
        create_log_file(base.to_str().unwrap()).unwrap();

        let created: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(created.len(), 1);
        assert!(created[0].starts_with("askpw.log."));
        assert!(created[0].ends_with(&format!(".{}", std::process::id())));
    }

    #[test]
    fn unwritable_location_reports_path() {
        let err = create_log_file("/nonexistent/dir/askpw.log").unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/dir/askpw.log."));
    }
}
