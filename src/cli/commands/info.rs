//! Info command implementation.
//!
//! Gathers the environment report and prints it, as text or JSON.

use std::path::{Path, PathBuf};

use crate::cli::args::InfoArgs;
use crate::config::{load_config, ConfigOverrides, EnvInfoConfig};
use crate::error::Result;
use crate::report::ReportGatherer;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Prefix of the single error line printed when the report cannot be built.
pub const FAILURE_MESSAGE: &str = "Failed to get Backpack environment info";

/// The info command implementation.
pub struct InfoCommand<'a> {
    project_root: PathBuf,
    args: InfoArgs,
    runner: &'a dyn CommandRunner,
}

impl<'a> InfoCommand<'a> {
    /// Create a new info command.
    pub fn new(project_root: &Path, args: InfoArgs, runner: &'a dyn CommandRunner) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            runner,
        }
    }

    /// Resolve config: defaults, then project file, then flags.
    fn config(&self) -> Result<EnvInfoConfig> {
        let overrides = ConfigOverrides {
            npm_command: self.args.npm.clone(),
            node_command: self.args.node.clone(),
            skip_outdated: self.args.skip_outdated,
        };
        Ok(load_config(&self.project_root)?.with_overrides(&overrides))
    }
}

impl Command for InfoCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.config()?;
        tracing::debug!("Resolved config: {:?}", config);

        let gatherer =
            ReportGatherer::new(self.runner, &config).with_cwd(self.project_root.clone());

        let mut spinner = ui.start_spinner("Collecting Backpack environment info...");
        let gathered = gatherer.gather();
        spinner.finish_and_clear();
        let report = gathered?;

        if self.args.json {
            ui.message(&report.to_json()?);
        } else {
            for line in report.render_lines() {
                ui.message(&line);
            }
        }

        Ok(CommandResult::success())
    }
}
