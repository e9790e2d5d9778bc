//! Version comparison and display formatting.

use semver::Version;
use serde::Serialize;

use crate::error::{EnvInfoError, Result};
use crate::packages::OutdatedRecord;

/// Marker appended to a version that is behind the latest release.
pub const OUTDATED_MARKER: &str = "[Outdated]";

/// Formatted version with its outdated status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    /// Text shown after the package name.
    pub display: String,
    /// Whether the installed version is older than the latest release.
    pub is_outdated: bool,
}

/// Parse a semantic version, accepting a leading `v` and surrounding whitespace.
pub fn parse_version(raw: &str) -> Result<Version> {
    let trimmed = raw.trim();
    let candidate = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(candidate).map_err(|e| EnvInfoError::VersionParse {
        version: raw.to_string(),
        message: e.to_string(),
    })
}

/// Whether `installed` precedes `latest` in semver order.
///
/// Pre-release versions sort before their release (`2.0.0-beta.1 < 2.0.0`).
pub fn is_outdated(installed: &str, latest: &str) -> Result<bool> {
    Ok(parse_version(installed)? < parse_version(latest)?)
}

/// Format an installed version, annotated with its outdated record if any.
///
/// Without a record the display is the installed version alone. A version
/// that cannot be parsed is reported as not outdated.
pub fn format_version_info(installed: &str, outdated: Option<&OutdatedRecord>) -> VersionInfo {
    let Some(record) = outdated else {
        return VersionInfo {
            display: installed.to_string(),
            is_outdated: false,
        };
    };

    let is_outdated = match is_outdated(installed, &record.latest) {
        Ok(outdated) => outdated,
        Err(e) => {
            tracing::warn!("Cannot compare versions, assuming up to date: {}", e);
            false
        }
    };

    let mut display = format!(
        "{} (wanted: {}, latest: {})",
        installed, record.wanted, record.latest
    );
    if is_outdated {
        display.push(' ');
        display.push_str(OUTDATED_MARKER);
    }

    VersionInfo {
        display,
        is_outdated,
    }
}

/// Normalize `node --version` output: trim and drop one leading `v`.
pub fn normalize_runtime_version(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed.strip_prefix('v').unwrap_or(trimmed).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(wanted: &str, latest: &str) -> OutdatedRecord {
        OutdatedRecord {
            current: None,
            wanted: wanted.to_string(),
            latest: latest.to_string(),
        }
    }

    #[test]
    fn without_record_is_installed_version() {
        let info = format_version_info("2.0.0", None);

        assert_eq!(info.display, "2.0.0");
        assert!(!info.is_outdated);
    }

    #[test]
    fn older_than_latest_is_outdated() {
        let info = format_version_info("1.0.0", Some(&record("1.1.0", "1.1.0")));

        assert!(info.is_outdated);
        assert_eq!(
            info.display,
            "1.0.0 (wanted: 1.1.0, latest: 1.1.0) [Outdated]"
        );
    }

    #[test]
    fn equal_to_latest_is_not_outdated() {
        let info = format_version_info("1.1.0", Some(&record("1.1.0", "1.1.0")));

        assert!(!info.is_outdated);
        assert_eq!(info.display, "1.1.0 (wanted: 1.1.0, latest: 1.1.0)");
    }

    #[test]
    fn newer_than_latest_is_not_outdated() {
        let info = format_version_info("2.0.0-beta.1", Some(&record("1.9.0", "1.9.0")));

        assert!(!info.is_outdated);
    }

    #[test]
    fn malformed_version_is_not_outdated() {
        let info = format_version_info("file:../bpk", Some(&record("1.0.0", "1.0.0")));

        assert!(!info.is_outdated);
        assert!(!info.display.contains(OUTDATED_MARKER));
    }

    #[test]
    fn is_outdated_follows_semver_precedence() {
        assert!(is_outdated("1.2.3", "1.10.0").unwrap());
        assert!(is_outdated("1.9.9", "2.0.0").unwrap());
        assert!(!is_outdated("1.10.0", "1.9.0").unwrap());
    }

    #[test]
    fn prerelease_sorts_before_release() {
        assert!(is_outdated("2.0.0-beta.1", "2.0.0").unwrap());
        assert!(is_outdated("2.0.0-alpha", "2.0.0-beta").unwrap());
    }

    #[test]
    fn is_outdated_rejects_malformed_input() {
        let err = is_outdated("1.0", "1.1.0").unwrap_err();

        match err {
            EnvInfoError::VersionParse { version, .. } => assert_eq!(version, "1.0"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_version_accepts_leading_v() {
        assert_eq!(parse_version("v18.2.0").unwrap(), Version::new(18, 2, 0));
        assert_eq!(parse_version(" 8.1.0\n").unwrap(), Version::new(8, 1, 0));
    }

    #[test]
    fn normalizes_runtime_version() {
        assert_eq!(normalize_runtime_version("v18.2.0\n"), "18.2.0");
        assert_eq!(normalize_runtime_version("18.2.0"), "18.2.0");
        assert_eq!(normalize_runtime_version("  v20.0.0-pre  "), "20.0.0-pre");
    }

    #[test]
    fn normalize_strips_only_one_v() {
        assert_eq!(normalize_runtime_version("vv1.0.0"), "v1.0.0");
    }
}
