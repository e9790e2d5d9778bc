//! Shell command execution.

use crate::error::{EnvInfoError, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Default standard output limit for listing commands (10 MiB).
pub const DEFAULT_MAX_OUTPUT: usize = 10 * 1024 * 1024;

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// Take standard output, failing if the command exited non-zero.
    pub fn into_stdout(self, command: &str) -> Result<String> {
        if self.success {
            Ok(self.stdout)
        } else {
            Err(EnvInfoError::CommandFailed {
                command: command.to_string(),
                code: self.exit_code,
            })
        }
    }

    /// Take standard output regardless of exit status.
    ///
    /// For commands like `npm outdated` that report findings through a
    /// non-zero exit code.
    pub fn tolerated_stdout(self) -> String {
        self.stdout
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Maximum bytes of standard output to accept (None = unlimited).
    pub max_output: Option<usize>,
}

impl CommandOptions {
    /// Options for running in `cwd` with an output limit.
    pub fn in_dir(cwd: Option<PathBuf>, max_output: Option<usize>) -> Self {
        Self { cwd, max_output }
    }
}

/// Execute a shell command, capturing stdout and stderr.
///
/// A non-zero exit is reported through [`CommandResult::success`], not as an
/// error. Errors are reserved for spawn failures and oversized output.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let (shell, flag) = shell_invocation();

    let mut cmd = Command::new(shell);
    cmd.arg(flag);
    cmd.arg(command);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let output = cmd.output().map_err(|e| {
        tracing::debug!("Failed to spawn '{}': {}", command, e);
        EnvInfoError::CommandFailed {
            command: command.to_string(),
            code: None,
        }
    })?;

    let duration = start.elapsed();

    if let Some(limit) = options.max_output {
        if output.stdout.len() > limit {
            return Err(EnvInfoError::OutputTooLarge {
                command: command.to_string(),
                limit,
            });
        }
    }

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    tracing::debug!(
        "Ran '{}' in {:?} (exit code {:?})",
        command,
        duration,
        output.status.code()
    );

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

/// Shell executable and the flag that passes it a command string.
fn shell_invocation() -> (String, &'static str) {
    if cfg!(target_os = "windows") {
        let shell = std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string());
        (shell, "/C")
    } else {
        ("/bin/sh".to_string(), "-c")
    }
}
