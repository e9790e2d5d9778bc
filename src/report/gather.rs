//! Report gathering.
//!
//! Runs the external commands in a fixed order and turns their output into an
//! [`EnvironmentReport`]. Any failure while fetching aborts the whole report.

use std::path::PathBuf;

use crate::config::EnvInfoConfig;
use crate::error::{EnvInfoError, Result};
use crate::packages::{
    first_party_packages, managed_tooling, parse_installed, parse_outdated,
    InstalledTree, OutdatedPackages,
};
use crate::shell::{CommandOptions, CommandRunner};
use crate::version::normalize_runtime_version;

use super::model::{EnvironmentReport, VersionLine};

/// Collects report data through a [`CommandRunner`].
pub struct ReportGatherer<'a> {
    runner: &'a dyn CommandRunner,
    config: &'a EnvInfoConfig,
    cwd: Option<PathBuf>,
}

impl<'a> ReportGatherer<'a> {
    /// Create a gatherer that runs commands in the current directory.
    pub fn new(runner: &'a dyn CommandRunner, config: &'a EnvInfoConfig) -> Self {
        Self {
            runner,
            config,
            cwd: None,
        }
    }

    /// Run commands in `cwd` instead of the current directory.
    pub fn with_cwd(mut self, cwd: PathBuf) -> Self {
        self.cwd = Some(cwd);
        self
    }

    /// Fetch everything and build the report.
    pub fn gather(&self) -> Result<EnvironmentReport> {
        let installed = self.installed_packages()?;
        let outdated = if self.config.check_outdated {
            Some(self.outdated_packages()?)
        } else {
            None
        };
        let runtime_version = self.runtime_version()?;
        let package_manager_version = self.package_manager_version()?;

        Ok(Self::build(
            &installed,
            outdated.as_ref(),
            &self.config.managed_tooling,
            runtime_version,
            package_manager_version,
        ))
    }

    /// Assemble a report from already-fetched data. Cannot fail.
    pub fn build(
        installed: &InstalledTree,
        outdated: Option<&OutdatedPackages>,
        tooling_key: &str,
        runtime_version: String,
        package_manager_version: String,
    ) -> EnvironmentReport {
        let managed_tooling = managed_tooling(installed, tooling_key)
            .map(|record| VersionLine::from_record(&record, outdated));

        let packages = first_party_packages(installed)
            .iter()
            .map(|record| VersionLine::from_record(record, outdated))
            .collect();

        EnvironmentReport {
            runtime_version,
            package_manager_version,
            managed_tooling,
            packages,
        }
    }

    /// `npm list --json`, parsed.
    pub fn installed_packages(&self) -> Result<InstalledTree> {
        let command = self.config.list_command();
        let stdout = self
            .runner
            .run(&command, &self.listing_options())?
            .into_stdout(&command)?;
        parse_installed(&stdout, &command)
    }

    /// `npm outdated --json`, parsed.
    ///
    /// npm exits non-zero when it finds outdated packages, so a failed exit
    /// is accepted as long as it printed something to parse. A failed exit
    /// with blank output means npm itself did not run.
    pub fn outdated_packages(&self) -> Result<OutdatedPackages> {
        let command = self.config.outdated_command();
        let result = self.runner.run(&command, &self.listing_options())?;
        if !result.success {
            if result.stdout.trim().is_empty() {
                return Err(EnvInfoError::CommandFailed {
                    command,
                    code: result.exit_code,
                });
            }
            tracing::debug!(
                "'{}' exited with {:?}; reading its output anyway",
                command,
                result.exit_code
            );
        }
        parse_outdated(&result.tolerated_stdout(), &command)
    }

    /// `node --version` without the leading `v`.
    pub fn runtime_version(&self) -> Result<String> {
        let command = self.config.runtime_version_command();
        let stdout = self
            .runner
            .run(&command, &self.version_options())?
            .into_stdout(&command)?;
        Ok(normalize_runtime_version(&stdout))
    }

    /// `npm --version`, trimmed.
    pub fn package_manager_version(&self) -> Result<String> {
        let command = self.config.package_manager_version_command();
        let stdout = self
            .runner
            .run(&command, &self.version_options())?
            .into_stdout(&command)?;
        Ok(stdout.trim().to_string())
    }

    fn listing_options(&self) -> CommandOptions {
        CommandOptions::in_dir(self.cwd.clone(), Some(self.config.max_output_bytes))
    }

    fn version_options(&self) -> CommandOptions {
        CommandOptions::in_dir(self.cwd.clone(), None)
    }
}
