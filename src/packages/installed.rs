//! Installed package tree from `npm list --json`.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{EnvInfoError, Result};

/// Top level of `npm list --json` output.
///
/// Only direct dependencies are read. Nested `dependencies` of each entry
/// and every other field npm emits are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InstalledTree {
    /// Direct dependencies keyed by package name, sorted by name.
    #[serde(default)]
    pub dependencies: BTreeMap<String, InstalledPackage>,
}

/// A single installed dependency.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InstalledPackage {
    /// Installed version. npm leaves this out for missing or invalid entries.
    #[serde(default)]
    pub version: Option<String>,
}

impl InstalledTree {
    /// Look up a direct dependency by name.
    pub fn get(&self, name: &str) -> Option<&InstalledPackage> {
        self.dependencies.get(name)
    }
}

/// Parse `npm list --json` output.
///
/// `source_command` names the command in the error when parsing fails.
pub fn parse_installed(text: &str, source_command: &str) -> Result<InstalledTree> {
    serde_json::from_str(text).map_err(|e| EnvInfoError::ParseError {
        source_command: source_command.to_string(),
        message: e.to_string(),
    })
}
