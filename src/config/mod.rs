mod loader;
mod types;

pub use loader::{ConfigError, CONFIG_PATH_ENV};
pub use types::{Config, DEFAULT_BIN, DEFAULT_ENTRY_ENV, DEFAULT_PROMPT};
