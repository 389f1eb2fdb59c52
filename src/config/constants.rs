// Project-wide constants
//
// Centralised here so the port number and other defaults have one source of
// truth. Import via `use crate::config::constants::*;`.

/// Default bind address (all interfaces). The standalone React client expects
/// the API on port 54568.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:54568";

/// Samples directory, relative to the working directory.
pub const DEFAULT_SAMPLES_DIR: &str = "samples";

/// Request body cap for uploads and JSON submissions (32 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Directory under $HOME holding `config.toml`.
pub const CONFIG_DIR_NAME: &str = ".html-renderer";

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Log filter used when RUST_LOG is unset.
pub const DEFAULT_LOG_FILTER: &str = "html_renderer=info,tower_http=info";
