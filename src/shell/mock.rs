//! Mock command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] with canned results keyed by
//! the exact command string, and records every command it was asked to run.
//!
//! # Example
//!
//! ```
//! use bpk_envinfo::shell::{CommandOptions, CommandRunner, MockRunner};
//!
//! let runner = MockRunner::new().with_success("npm --version", "8.1.0\n");
//!
//! let result = runner.run("npm --version", &CommandOptions::default()).unwrap();
//! assert_eq!(result.stdout, "8.1.0\n");
//! assert_eq!(runner.commands(), vec!["npm --version".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::{EnvInfoError, Result};

use super::command::{CommandOptions, CommandResult};
use super::runner::CommandRunner;

/// Exit code shells use for "command not found".
const NOT_FOUND_EXIT_CODE: i32 = 127;

#[derive(Debug, Clone)]
enum MockResponse {
    Exit { code: i32, stdout: String },
    SpawnError,
}

/// Mock command runner.
///
/// Commands without a configured response behave like a missing executable:
/// they exit with code 127 and empty output.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: HashMap<String, MockResponse>,
    commands: RefCell<Vec<String>>,
}

impl MockRunner {
    /// Create a runner with no configured responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to `command` with exit code 0 and `stdout`.
    pub fn with_success(self, command: &str, stdout: &str) -> Self {
        self.with_exit(command, 0, stdout)
    }

    /// Respond to `command` with the given exit code and `stdout`.
    pub fn with_exit(mut self, command: &str, code: i32, stdout: &str) -> Self {
        self.responses.insert(
            command.to_string(),
            MockResponse::Exit {
                code,
                stdout: stdout.to_string(),
            },
        );
        self
    }

    /// Make `command` fail to spawn.
    pub fn with_spawn_error(mut self, command: &str) -> Self {
        self.responses
            .insert(command.to_string(), MockResponse::SpawnError);
        self
    }

    /// Commands run so far, in order.
    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, command: &str, options: &CommandOptions) -> Result<CommandResult> {
        self.commands.borrow_mut().push(command.to_string());

        let (code, stdout) = match self.responses.get(command) {
            Some(MockResponse::Exit { code, stdout }) => (*code, stdout.clone()),
            Some(MockResponse::SpawnError) => {
                return Err(EnvInfoError::CommandFailed {
                    command: command.to_string(),
                    code: None,
                })
            }
            None => (NOT_FOUND_EXIT_CODE, String::new()),
        };

        if let Some(limit) = options.max_output {
            if stdout.len() > limit {
                return Err(EnvInfoError::OutputTooLarge {
                    command: command.to_string(),
                    limit,
                });
            }
        }

        if code == 0 {
            Ok(CommandResult::success(stdout, String::new(), Duration::ZERO))
        } else {
            Ok(CommandResult::failure(
                Some(code),
                stdout,
                String::new(),
                Duration::ZERO,
            ))
        }
    }
}
