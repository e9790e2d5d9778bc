//! npm package data: parsing `npm list` / `npm outdated` JSON and picking
//! out first-party Backpack packages.
//!
//! - [`installed`] - Typed shape of `npm list --json`
//! - [`outdated`] - Typed shape of `npm outdated --json`
//! - [`filter`] - First-party name predicate and lookups

pub mod filter;
pub mod installed;
pub mod outdated;

pub use filter::{
    first_party_packages, is_first_party, managed_tooling, PackageRecord,
    MANAGED_TOOLING_PACKAGE,
};
pub use installed::{parse_installed, InstalledPackage, InstalledTree};
pub use outdated::{parse_outdated, OutdatedPackages, OutdatedRecord};
