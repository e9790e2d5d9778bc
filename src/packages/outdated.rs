//! Outdated package records from `npm outdated --json`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{EnvInfoError, Result};

/// Wanted/latest metadata for one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutdatedRecord {
    /// Currently installed version. Absent when the package is not installed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    /// Highest version satisfying the declared range.
    pub wanted: String,
    /// Latest published version.
    pub latest: String,
}

/// Outdated records keyed by package name.
///
/// Packages missing from the map are up to date.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct OutdatedPackages {
    records: BTreeMap<String, OutdatedRecord>,
}

impl OutdatedPackages {
    /// Create an empty set (nothing outdated).
    pub fn new() -> Self {
        Self::default()
    }

    /// Record for `name`, if npm reported it as outdated.
    pub fn get(&self, name: &str) -> Option<&OutdatedRecord> {
        self.records.get(name)
    }
}

/// Parse `npm outdated --json` output.
///
/// Blank output is treated as "nothing outdated"; some npm versions print
/// nothing at all in that case.
pub fn parse_outdated(text: &str, source_command: &str) -> Result<OutdatedPackages> {
    if text.trim().is_empty() {
        return Ok(OutdatedPackages::new());
    }

    serde_json::from_str(text).map_err(|e| EnvInfoError::ParseError {
        source_command: source_command.to_string(),
        message: e.to_string(),
    })
}
