//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for interactive terminals (with a progress spinner)
//! - [`NonInteractiveUI`] for pipes, CI and other headless use
//! - [`MockUI`] for tests
//!
//! The report goes to standard output; errors and spinners go to standard
//! error.
//!
//! # Example
//!
//! ```
//! use bpk_envinfo::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Node version: 18.2.0");
//! assert_eq!(ui.messages(), ["Node version: 18.2.0"]);
//! ```

pub mod mock;
pub mod non_interactive;
pub mod spinner;
pub mod terminal;

pub use mock::{MockSpinner, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};

/// Trait for user-facing output.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Print a line of the report to standard output.
    fn message(&mut self, msg: &str);

    /// Print an error to standard error.
    fn error(&mut self, msg: &str);

    /// Start a spinner for a long-running operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Stop the spinner and erase it.
    fn finish_and_clear(&mut self);
}
