//! Unified error type for all supportlog operations.

/// Error type for supportlog operations.
///
/// Formatting itself never fails; these cover config loading, printing to a
/// writer, and building error chains by hand.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// `init_cause` was called on an error whose cause is already set.
    CauseAlreadySet(String),
    /// An error cannot be its own cause.
    SelfCausation(String),
    /// An error cannot suppress itself.
    SelfSuppression(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::CauseAlreadySet(s) => write!(f, "can't overwrite cause of {s}"),
            Self::SelfCausation(s) => write!(f, "self-causation not permitted: {s}"),
            Self::SelfSuppression(s) => write!(f, "self-suppression not permitted: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
