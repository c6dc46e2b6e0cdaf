//! Raw bytes → `OsString` without losing anything the platform can represent.

use std::ffi::OsString;

/// On Unix every byte sequence is a valid `OsString`. Elsewhere invalid UTF-8 is
/// replaced, since the platform could not pass it to a child anyway.
#[cfg(unix)]
pub(crate) fn os_string_from_vec(bytes: Vec<u8>) -> OsString {
    use std::os::unix::ffi::OsStringExt;

    OsString::from_vec(bytes)
}

#[cfg(not(unix))]
pub(crate) fn os_string_from_vec(bytes: Vec<u8>) -> OsString {
    match String::from_utf8(bytes) {
        Ok(s) => s.into(),
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned().into(),
    }
}
