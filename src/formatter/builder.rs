//! Stepwise construction of a [`SupportFormatter`].

use super::SupportFormatter;
use crate::fmt::MessageTransformer;

/// Both toggles start at their documented defaults: escaping on, `"> "` marker.
#[derive(Debug, Clone, Default)]
pub struct FormatterBuilder {
    transformer: MessageTransformer,
}

impl FormatterBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `false` keeps message text verbatim, for setups that post-process logs.
    #[must_use]
    pub fn transform(mut self, enabled: bool) -> Self {
        self.transformer = self.transformer.enabled(enabled);
        self
    }

    /// Marker written after each `[LF]`/`[CR]`/`[CRLF]` label.
    #[must_use]
    pub fn newline_indicator(mut self, indicator: impl Into<String>) -> Self {
        self.transformer = self.transformer.newline_indicator(indicator);
        self
    }

    #[must_use]
    pub fn build(self) -> SupportFormatter {
        SupportFormatter {
            transformer: self.transformer,
        }
    }
}
