use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::{debug, warn};

/// The password manager failed to start or exited unsuccessfully.
#[derive(Debug, Error)]
#[error("{} did not exit successfully", .path.display())]
pub struct InvokeError {
    pub path: PathBuf,
}

/// Run `path` with `args`, wiring stdin/stdout/stderr straight through, and
/// wait for it to exit.
pub fn invoke(path: &Path, args: &[OsString]) -> Result<(), InvokeError> {
    debug!(command = %path.display(), ?args, "spawning password manager");

    let status = Command::new(path)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status();

    let failed = || InvokeError {
        path: path.to_path_buf(),
    };

    match status {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => {
            debug!(%status, "password manager exited unsuccessfully");
            Err(failed())
        }
        Err(err) => {
            warn!(error = %err, "failed to start password manager");
            Err(failed())
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::invoke;
    use std::ffi::OsString;
    use std::path::Path;

    fn args(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn zero_exit_is_ok() {
        assert!(invoke(Path::new("/bin/sh"), &args(&["-c", "exit 0"])).is_ok());
    }

    #[test]
    fn nonzero_exit_is_error() {
        let err = invoke(Path::new("/bin/sh"), &args(&["-c", "exit 7"])).unwrap_err();
        assert_eq!(err.to_string(), "/bin/sh did not exit successfully");
    }

    #[test]
    fn spawn_failure_is_error() {
        assert!(invoke(Path::new("/nonexistent/prog"), &[]).is_err());
    }

    #[test]
    fn entry_arrives_as_last_argument() {
        let argv = args(&["-c", r#"test "$2" = mail"#, "sh", "-x", "mail"]);
        assert!(invoke(Path::new("/bin/sh"), &argv).is_ok());
    }
}
