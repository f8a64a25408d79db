//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait so commands can be driven by a mock in tests
//! - [`TerminalUI`] writing results to stdout and errors to stderr
//! - [`MockUI`] capturing every call for assertions
//! - [`Table`] for aligned listings
//!
//! # Example
//!
//! ```
//! use stackname::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.result("staging-core-stack");
//! assert_eq!(ui.results(), &["staging-core-stack".to_string()]);
//! ```

pub mod mock;
pub mod output;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use table::Table;
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

    /// Print command output (names, JSON, YAML). Shown in every mode.
    fn result(&mut self, text: &str);

    /// Display a status message.
    fn message(&mut self, msg: &str);

    /// Display a detail line, shown only in verbose mode.
    fn detail(&mut self, key: &str, value: &str, note: Option<&str>);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Always shown.
    fn error(&mut self, msg: &str);

    /// Show a section header.
    fn show_header(&mut self, title: &str);
}
