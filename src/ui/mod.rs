//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] writing to the real terminal
//! - [`MockUI`] capturing output for tests
//!
//! Resolved configurations are machine-readable payloads: they go to stdout
//! through [`UserInterface::emit`] regardless of output mode. Status
//! messages go to stderr and respect the [`OutputMode`].
//!
//! # Example
//!
//! ```
//! use webpack_env::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.emit("{}");
//! ui.success("Resolved");
//! assert_eq!(ui.emitted(), ["{}"]);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, Theme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Change the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Write a machine-readable payload. Never suppressed.
    fn emit(&mut self, payload: &str);

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Display a `key: value` line.
    fn key_value(&mut self, key: &str, value: &str) {
        self.message(&format!("{}: {}", key, value));
    }
}
