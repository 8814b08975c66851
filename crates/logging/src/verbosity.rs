//! crates/logging/src/verbosity.rs
//! Verbosity levels selected on the command line.

use std::fmt;

/// Targets whose events are raised above the baseline as verbosity grows.
const WORKSPACE_TARGETS: [&str; 2] = ["remote", "cli"];

/// Diagnostic verbosity, from silent to full tracing.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VerbosityLevel {
    /// Errors only (`--quiet`).
    Quiet,
    /// Warnings, such as lenient NFS parses (default).
    #[default]
    Normal,
    /// Informational events (`-v`).
    Verbose,
    /// Decode/encode events (`-vv`).
    Debug,
    /// Everything (`-vvv` and above).
    Trace,
}

impl VerbosityLevel {
    /// Maps a count of `-v` flags to a level.
    #[must_use]
    pub const fn from_verbose_level(count: u8) -> Self {
        match count {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Resolves the level from `-v` and `--quiet`; quiet wins.
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else {
            Self::from_verbose_level(verbose)
        }
    }

    /// Returns the level name used in filter directives.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Returns the default filter directive for this level.
    ///
    /// Dependencies stay at `warn` (or `error` when quiet) while workspace
    /// crates follow the selected level.
    #[must_use]
    pub fn directive(self) -> String {
        let baseline = match self {
            Self::Quiet => "error",
            _ => "warn",
        };

        let mut directive = String::from(baseline);
        if self > Self::Normal {
            for target in WORKSPACE_TARGETS {
                directive.push(',');
                directive.push_str(target);
                directive.push('=');
                directive.push_str(self.as_str());
            }
        }
        directive
    }
}

impl fmt::Display for VerbosityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
