//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::EnvInfoConfig;
use crate::error::{EnvInfoError, Result};

/// Config file name, looked up in the project directory.
pub const CONFIG_FILE_NAME: &str = ".bpk-envinfo.yml";

/// Path of the project config file, if one exists.
pub fn find_config_file(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load and parse a single config file.
pub fn load_config_file(path: &Path) -> Result<EnvInfoConfig> {
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Parse YAML content into [`EnvInfoConfig`].
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<EnvInfoConfig> {
    if content.trim().is_empty() {
        return Ok(EnvInfoConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| EnvInfoError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the project config, falling back to defaults when there is none.
pub fn load_config(project_root: &Path) -> Result<EnvInfoConfig> {
    match find_config_file(project_root) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => Ok(EnvInfoConfig::default()),
    }
}
