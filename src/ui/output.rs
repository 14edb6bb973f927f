//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including scan statistics.
    Verbose,
    /// Show the banner, status messages and the report.
    #[default]
    Normal,
    /// Show the report only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows scan statistics.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows the banner, status messages and guidance.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
