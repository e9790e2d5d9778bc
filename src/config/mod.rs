//! Configuration loading.
//!
//! Settings come from built-in defaults, then the optional
//! `.bpk-envinfo.yml` in the project directory, then command-line flags and
//! environment variables.

pub mod loader;
pub mod schema;

pub use loader::{find_config_file, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{ConfigOverrides, EnvInfoConfig};
