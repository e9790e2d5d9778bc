//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.
//!
//! # Example
//!
//! ```
//! use bpk_envinfo::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Backpack environment info");
//! ui.error("Failed to get Backpack environment info: boom");
//!
//! assert!(ui.messages().contains(&"Backpack environment info".to_string()));
//! assert_eq!(ui.errors().len(), 1);
//! ```

use std::sync::{Arc, Mutex};

use super::{SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    errors: Vec<String>,
    spinners: Vec<String>,
    spinners_cleared: Arc<Mutex<usize>>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Messages of every spinner started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Number of spinners that were finished and cleared.
    pub fn spinners_cleared(&self) -> usize {
        *self.spinners_cleared.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            cleared: Arc::clone(&self.spinners_cleared),
        })
    }
}

/// Spinner returned by [`MockUI`]; counts how often it is cleared.
pub struct MockSpinner {
    cleared: Arc<Mutex<usize>>,
}

impl SpinnerHandle for MockSpinner {
    fn finish_and_clear(&mut self) {
        let mut cleared = self.cleared.lock().unwrap_or_else(|e| e.into_inner());
        *cleared += 1;
    }
}
