//! Plain line output for pipes and CI.

use super::{SpinnerHandle, UserInterface};

/// Non-interactive UI: plain `println!`/`eprintln!`, no spinners.
#[derive(Debug, Default)]
pub struct NonInteractiveUI;

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new() -> Self {
        Self
    }
}

/// Spinner that does nothing.
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn finish_and_clear(&mut self) {}
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(NoopSpinner)
    }
}
