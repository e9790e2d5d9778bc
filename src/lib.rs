//! bpk-envinfo - Backpack environment info.
//!
//! Reports the local Node and npm versions, whether `backpack-react-scripts`
//! is used, and the installed versions of first-party Backpack packages
//! (`bpk-*`, `react-native-bpk-*`), flagging those behind their latest
//! release.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading
//! - [`error`] - Error types and result aliases
//! - [`packages`] - Parsing npm output and filtering first-party packages
//! - [`report`] - Gathering and rendering the report
//! - [`shell`] - Shell command execution
//! - [`ui`] - Terminal output
//! - [`version`] - Version comparison and formatting
//!
//! # Example
//!
//! ```
//! use bpk_envinfo::config::EnvInfoConfig;
//! use bpk_envinfo::report::ReportGatherer;
//! use bpk_envinfo::shell::MockRunner;
//!
//! let runner = MockRunner::new()
//!     .with_success("npm list --json", r#"{"dependencies": {"bpk-mixins": {"version": "1.0.0"}}}"#)
//!     .with_success("npm outdated --json", "{}")
//!     .with_success("node --version", "v18.2.0")
//!     .with_success("npm --version", "8.1.0");
//! let config = EnvInfoConfig::default();
//!
//! let report = ReportGatherer::new(&runner, &config).gather().unwrap();
//! assert!(report.render_lines().contains(&"bpk-mixins: 1.0.0".to_string()));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod packages;
pub mod report;
pub mod shell;
pub mod ui;
pub mod version;

pub use error::{EnvInfoError, Result};
