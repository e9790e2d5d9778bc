//! Configuration schema.
//!
//! Maps to the optional `.bpk-envinfo.yml` file in the project directory.
//! Every field has a default, so an empty file (or no file) is valid.

use serde::{Deserialize, Serialize};

use crate::packages::MANAGED_TOOLING_PACKAGE;
use crate::shell::DEFAULT_MAX_OUTPUT;

/// Root configuration structure for `.bpk-envinfo.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvInfoConfig {
    /// Package-manager command (e.g. `npm`, or a path to one)
    pub npm_command: String,

    /// Runtime command (e.g. `node`)
    pub node_command: String,

    /// Tooling package reported on its own lines
    pub managed_tooling: String,

    /// Run `npm outdated` and annotate versions
    pub check_outdated: bool,

    /// Largest accepted stdout of the listing commands, in bytes
    pub max_output_bytes: usize,
}

impl Default for EnvInfoConfig {
    fn default() -> Self {
        Self {
            npm_command: "npm".to_string(),
            node_command: "node".to_string(),
            managed_tooling: MANAGED_TOOLING_PACKAGE.to_string(),
            check_outdated: true,
            max_output_bytes: DEFAULT_MAX_OUTPUT,
        }
    }
}

/// Values from the command line and environment that win over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub npm_command: Option<String>,
    pub node_command: Option<String>,
    pub skip_outdated: bool,
}

impl EnvInfoConfig {
    /// Apply command-line overrides.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(npm) = &overrides.npm_command {
            self.npm_command = npm.clone();
        }
        if let Some(node) = &overrides.node_command {
            self.node_command = node.clone();
        }
        if overrides.skip_outdated {
            self.check_outdated = false;
        }
        self
    }

    /// `npm list --json`
    pub fn list_command(&self) -> String {
        format!("{} list --json", self.npm_command)
    }

    /// `npm outdated --json`
    pub fn outdated_command(&self) -> String {
        format!("{} outdated --json", self.npm_command)
    }

    /// `node --version`
    pub fn runtime_version_command(&self) -> String {
        format!("{} --version", self.node_command)
    }

    /// `npm --version`
    pub fn package_manager_version_command(&self) -> String {
        format!("{} --version", self.npm_command)
    }
}
