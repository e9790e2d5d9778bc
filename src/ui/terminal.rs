//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::shell::is_ci;

use super::{NonInteractiveUI, ProgressSpinner, SpinnerHandle, UserInterface};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    out: Term,
    err: Term,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", msg).ok();
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(ProgressSpinner::new(message))
    }
}

/// Create the appropriate UI based on context.
///
/// Spinners draw on standard error, so the terminal UI is only used when
/// standard error is a terminal and we are not running in CI.
pub fn create_ui() -> Box<dyn UserInterface> {
    if !is_ci() && Term::stderr().is_term() {
        Box::new(TerminalUI::new())
    } else {
        Box::new(NonInteractiveUI::new())
    }
}
