//! Configuration struct definitions.

use crate::fmt::DEFAULT_NEWLINE_INDICATOR;
use serde::Deserialize;

/// Line-break escaping toggles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Pass message text through verbatim.
    pub disabled: bool,
    /// Marker written after each `[LF]`/`[CR]`/`[CRLF]` label.
    pub newline_indicator: String,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            newline_indicator: DEFAULT_NEWLINE_INDICATOR.to_string(),
        }
    }
}

/// supportlog's own diagnostics on stderr.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Off unless asked for; a formatter library should stay quiet.
    pub enabled: bool,
    /// Minimum level written.
    pub level: String,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "warning".to_string(),
        }
    }
}
