//! Report data and rendering.

use serde::Serialize;

use crate::error::Result;
use crate::packages::{OutdatedPackages, OutdatedRecord, PackageRecord};
use crate::version::format_version_info;

/// First line of the text report.
pub const REPORT_TITLE: &str = "Backpack environment info";

/// Shown for a dependency npm lists without a version.
pub const UNKNOWN_VERSION: &str = "unknown";

/// One package and its formatted version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionLine {
    pub name: String,
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdated: Option<OutdatedRecord>,
    pub is_outdated: bool,
    pub display: String,
}

impl VersionLine {
    /// Build a line for `name`, looking up its outdated record when given.
    pub fn new(name: &str, version: Option<&str>, outdated: Option<&OutdatedPackages>) -> Self {
        let record = outdated.and_then(|o| o.get(name)).cloned();
        let (display, is_outdated) = match version {
            Some(v) => {
                let info = format_version_info(v, record.as_ref());
                (info.display, info.is_outdated)
            }
            None => (UNKNOWN_VERSION.to_string(), false),
        };

        Self {
            name: name.to_string(),
            version: version.map(String::from),
            outdated: record,
            is_outdated,
            display,
        }
    }

    /// Build a line from a filtered package record.
    pub fn from_record(record: &PackageRecord, outdated: Option<&OutdatedPackages>) -> Self {
        Self::new(&record.name, record.version.as_deref(), outdated)
    }
}

/// Everything the report prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentReport {
    pub runtime_version: String,
    pub package_manager_version: String,
    /// Managed tooling package, when it is a direct dependency.
    pub managed_tooling: Option<VersionLine>,
    /// First-party packages, sorted by name.
    pub packages: Vec<VersionLine>,
}

impl EnvironmentReport {
    /// Render the human-readable report, one entry per output line.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = vec![
            REPORT_TITLE.to_string(),
            format!("Node version: {}", self.runtime_version),
            format!("NPM version: {}", self.package_manager_version),
        ];

        match &self.managed_tooling {
            Some(tooling) => {
                lines.push("Backpack React Scripts used: Yes".to_string());
                if tooling.version.is_some() {
                    lines.push(format!(
                        "Backpack React Scripts version: {}",
                        tooling.display
                    ));
                }
            }
            None => lines.push("Backpack React Scripts used: No".to_string()),
        }

        if !self.packages.is_empty() {
            lines.push("Backpack Packages:".to_string());
            lines.extend(
                self.packages
                    .iter()
                    .map(|p| format!("{}: {}", p.name, p.display)),
            );
        }

        lines
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| anyhow::Error::from(e).into())
    }
}
