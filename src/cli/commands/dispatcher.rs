//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing the parsed CLI

use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::shell::{CommandRunner, ShellRunner};
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches the parsed CLI to its command.
pub struct CommandDispatcher {
    project_root: PathBuf,
    runner: Box<dyn CommandRunner>,
}

impl CommandDispatcher {
    /// Create a dispatcher that runs real shell commands in `project_root`.
    pub fn new(project_root: PathBuf) -> Self {
        Self::with_runner(project_root, Box::new(ShellRunner::new()))
    }

    /// Create a dispatcher with a custom command runner.
    pub fn with_runner(project_root: PathBuf, runner: Box<dyn CommandRunner>) -> Self {
        Self {
            project_root,
            runner,
        }
    }

    /// Dispatch and execute the command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let cmd = super::info::InfoCommand::new(
            &self.project_root,
            cli.info.clone(),
            self.runner.as_ref(),
        );
        cmd.execute(ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;
    use clap::Parser;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn dispatches_to_info_command() {
        let temp = tempfile::TempDir::new().unwrap();
        let runner = MockRunner::new()
            .with_success("npm list --json", "{}")
            .with_success("npm outdated --json", "{}")
            .with_success("node --version", "v18.2.0")
            .with_success("npm --version", "8.1.0");
        let dispatcher = CommandDispatcher::with_runner(temp.path().to_path_buf(), Box::new(runner));
        let cli = Cli::parse_from(["bpk-envinfo"]);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.messages()[0], "Backpack environment info");
    }
}
