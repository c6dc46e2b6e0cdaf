use std::ffi::OsStr;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

/// The command could not be found as an executable on PATH.
///
/// The lookup error from `which` is intentionally dropped from the message;
/// it is logged instead.
#[derive(Debug, Error)]
#[error("Unable to resolve {name}")]
pub struct ResolveError {
    pub name: String,
}

/// Resolve a command name to an absolute executable path.
///
/// Names containing a path separator are checked in place, bare names are
/// searched on PATH.
pub fn resolve(name: &OsStr) -> Result<PathBuf, ResolveError> {
    match which::which(name) {
        Ok(path) => {
            debug!(?name, path = %path.display(), "resolved command");
            Ok(path)
        }
        Err(err) => {
            debug!(?name, error = %err, "command lookup failed");
            Err(ResolveError {
                name: name.to_string_lossy().into_owned(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use std::ffi::OsStr;

    #[test]
    fn missing_absolute_path_fails() {
        let err = resolve(OsStr::new("/nonexistent/prog")).unwrap_err();
        assert_eq!(err.to_string(), "Unable to resolve /nonexistent/prog");
    }

    #[test]
    fn missing_bare_name_fails() {
        let err = resolve(OsStr::new("askpw-no-such-command-on-path")).unwrap_err();
        assert_eq!(err.name, "askpw-no-such-command-on-path");
    }

    #[cfg(unix)]
    #[test]
    fn bare_name_resolves_to_absolute_path() {
        let path = resolve(OsStr::new("sh")).unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("sh"));
    }
}
