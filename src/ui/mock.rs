//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Capture ignores the output mode so
//! tests can assert on everything a command tried to show.

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    results: Vec<String>,
    messages: Vec<String>,
    details: Vec<(String, String, Option<String>)>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with the given output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn details(&self) -> &[(String, String, Option<String>)] {
        &self.details
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All results joined by newlines.
    pub fn output(&self) -> String {
        self.results.join("\n")
    }

    /// Check whether any captured result line contains `needle`.
    pub fn has_result(&self, needle: &str) -> bool {
        self.results.iter().any(|r| r.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn result(&mut self, text: &str) {
        self.results.push(text.to_string());
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn detail(&mut self, key: &str, value: &str, note: Option<&str>) {
        self.details
            .push((key.to_string(), value.to_string(), note.map(str::to_string)));
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }
}
