//! Shell command execution.

pub mod command;
pub mod mock;
pub mod platform;
pub mod runner;

pub use command::{execute, CommandOptions, CommandResult, DEFAULT_MAX_OUTPUT};
pub use mock::MockRunner;
pub use platform::is_ci;
pub use runner::{CommandRunner, ShellRunner};
