//! Visual theme and styling.

use console::Style;

/// Terminal styles for stackname output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
    /// Style for secondary text such as value sources (dim).
    pub dim: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold().magenta(),
            key: Style::new().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            key: Style::new(),
            dim: Style::new(),
        }
    }

    /// Format a success message.
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header line.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format a `key: value` line, with an optional dimmed note.
    pub fn format_key_value(&self, key: &str, value: &str, note: Option<&str>) -> String {
        match note {
            Some(note) => format!(
                "{} {} {}",
                self.key.apply_to(format!("{}:", key)),
                value,
                self.dim.apply_to(format!("({})", note))
            ),
            None => format!("{} {}", self.key.apply_to(format!("{}:", key)), value),
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
