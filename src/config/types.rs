use serde::Deserialize;

/// Command invoked when no `--bin` is given.
pub const DEFAULT_BIN: &str = "pwsafe";

/// Environment variable holding a fallback entry name.
pub const DEFAULT_ENTRY_ENV: &str = "ASKPW_ENTRY";

/// Text written before reading the entry from stdin.
pub const DEFAULT_PROMPT: &str = "Which entry to select (blank to skip): ";

/// Root configuration container.
///
/// Every key is optional in the file; missing keys take the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Password manager command, resolved via PATH unless absolute.
    #[serde(default = "default_bin")]
    pub bin: String,
    /// Name of the environment variable consulted when `--entry` is absent.
    #[serde(default = "default_entry_env")]
    pub entry_env: String,
    /// Prompt text for interactive entry input.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Emit debug diagnostics.
    #[serde(default)]
    pub debug: bool,
    /// Program version; never read from the file.
    #[serde(skip, default = "default_version")]
    pub version: String,
}

fn default_bin() -> String {
    DEFAULT_BIN.to_string()
}

fn default_entry_env() -> String {
    DEFAULT_ENTRY_ENV.to_string()
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bin: default_bin(),
            entry_env: default_entry_env(),
            prompt: default_prompt(),
            debug: false,
            version: default_version(),
        }
    }
}
