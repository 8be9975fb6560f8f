//! Severity levels carried by a record and printed in its header.

use std::fmt;
use std::str::FromStr;

/// Ordered from the most verbose to the most severe, matching the
/// `java.util.logging` level names that readers of these logs expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Highly detailed tracing.
    Finest = 0,
    /// Fairly detailed tracing.
    Finer = 1,
    /// Tracing information.
    Fine = 2,
    /// Static configuration messages.
    Config = 3,
    /// Normal operational milestones.
    #[default]
    Info = 4,
    /// Potential problems.
    Warning = 5,
    /// Serious failures.
    Severe = 6,
}

impl Level {
    /// Upper-case name as it appears between the tabs of a formatted record.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Finest => "FINEST",
            Self::Finer => "FINER",
            Self::Fine => "FINE",
            Self::Config => "CONFIG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Severe => "SEVERE",
        }
    }

    /// All levels, least severe first.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Finest,
            Self::Finer,
            Self::Fine,
            Self::Config,
            Self::Info,
            Self::Warning,
            Self::Severe,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "finest" | "trace" => Ok(Self::Finest),
            "finer" => Ok(Self::Finer),
            "fine" | "debug" => Ok(Self::Fine),
            "config" => Ok(Self::Config),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "severe" | "error" | "err" => Ok(Self::Severe),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
