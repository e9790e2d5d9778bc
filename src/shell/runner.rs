//! Command runner abstraction.
//!
//! The report is gathered through a [`CommandRunner`] so tests can swap
//! real processes for canned output (see [`MockRunner`](super::MockRunner)).

use crate::error::Result;

use super::command::{execute, CommandOptions, CommandResult};

/// Something that can run a shell command string.
pub trait CommandRunner {
    /// Run `command` and wait for it to finish.
    fn run(&self, command: &str, options: &CommandOptions) -> Result<CommandResult>;
}

/// Runs commands through the platform shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl ShellRunner {
    /// Create a new shell runner.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, options: &CommandOptions) -> Result<CommandResult> {
        execute(command, options)
    }
}
