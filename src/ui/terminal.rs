//! Terminal UI.

use std::io::Write;

use console::Term;

use super::{should_use_colors, OutputMode, Theme, UserInterface};

/// Terminal UI implementation.
///
/// Results and status go to stdout; errors go to stderr so that
/// `stackname name CoreStack` can be captured by scripts.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: Theme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn result(&mut self, text: &str) {
        writeln!(self.out, "{}", text).ok();
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn detail(&mut self, key: &str, value: &str, note: Option<&str>) {
        if self.mode.shows_details() {
            writeln!(self.out, "  {}", self.theme.format_key_value(key, value, note)).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.out).ok();
            writeln!(self.out, "{}", self.theme.format_header(title)).ok();
            writeln!(self.out).ok();
        }
    }
}

/// Create the UI for the given mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
