//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show details such as where each value came from.
    Verbose,
    /// Show results and status messages.
    #[default]
    Normal,
    /// Show results only.
    Quiet,
}

impl OutputMode {
    /// Mode selected by the `--verbose` / `--quiet` flags. Quiet wins.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows detail lines.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows status messages (headers, success, warnings).
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}
