//! Environment report: gathering data from npm/node and rendering it.
//!
//! - [`gather`] - Runs the external commands through a
//!   [`CommandRunner`](crate::shell::CommandRunner)
//! - [`model`] - The gathered [`EnvironmentReport`] and its text/JSON forms

pub mod gather;
pub mod model;

pub use gather::ReportGatherer;
pub use model::{EnvironmentReport, VersionLine, REPORT_TITLE, UNKNOWN_VERSION};
