//! First-party package selection.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::installed::InstalledTree;

/// Shared build tooling reported separately from other first-party packages.
pub const MANAGED_TOOLING_PACKAGE: &str = "backpack-react-scripts";

static FIRST_PARTY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(bpk-|react-native-bpk-)").unwrap());

/// A first-party package and its installed version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageRecord {
    pub name: String,
    pub version: Option<String>,
}

/// Whether `name` belongs to the Backpack component library.
pub fn is_first_party(name: &str) -> bool {
    FIRST_PARTY_REGEX.is_match(name)
}

/// Direct dependencies whose names are first-party, sorted by name.
pub fn first_party_packages(tree: &InstalledTree) -> Vec<PackageRecord> {
    tree.dependencies
        .iter()
        .filter(|(name, _)| is_first_party(name))
        .map(|(name, package)| PackageRecord {
            name: name.clone(),
            version: package.version.clone(),
        })
        .collect()
}

/// The tooling package `key`, if it is a direct dependency.
///
/// Presence alone means the tooling is used; npm leaves the version out for
/// missing or invalid entries.
pub fn managed_tooling(tree: &InstalledTree, key: &str) -> Option<PackageRecord> {
    tree.get(key).map(|package| PackageRecord {
        name: key.to_string(),
        version: package.version.clone(),
    })
}
