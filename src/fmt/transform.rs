//! Line-break neutralisation for text that ends up inside a single log line.
//!
//! A message like `"login ok\n2024-01-01 ... SEVERE admin logged out"` would
//! otherwise forge a second record. Every break that is not at the very end of
//! the text is replaced by a platform line break followed by a visible label,
//! so the continuation can never be mistaken for the start of a new record.

/// Platform line separator used for every line the formatter synthesises.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// Platform line separator used for every line the formatter synthesises.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Marker appended after each break label unless configured otherwise.
pub const DEFAULT_NEWLINE_INDICATOR: &str = "> ";

/// The three break forms recognised inside message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBreak {
    CrLf,
    Lf,
    Cr,
}

impl LineBreak {
    /// Bracketed label inserted in place of a mid-text break.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CrLf => "[CRLF]",
            Self::Lf => "[LF]",
            Self::Cr => "[CR]",
        }
    }

    /// The exact characters this break consisted of in the source text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CrLf => "\r\n",
            Self::Lf => "\n",
            Self::Cr => "\r",
        }
    }
}

/// Escapes embedded line breaks. Immutable once built, so one instance can be
/// shared by every formatting thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTransformer {
    /// Off when downstream tooling post-processes logs and wants raw text.
    enabled: bool,
    newline_indicator: String,
}

impl Default for MessageTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageTransformer {
    /// Enabled, with the `"> "` marker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled: true,
            newline_indicator: DEFAULT_NEWLINE_INDICATOR.to_string(),
        }
    }

    /// A disabled transformer returns its input verbatim.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Marker written after every `[LF]`/`[CR]`/`[CRLF]` label.
    #[must_use]
    pub fn newline_indicator(mut self, indicator: impl Into<String>) -> Self {
        self.newline_indicator = indicator.into();
        self
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn indicator(&self) -> &str {
        &self.newline_indicator
    }

    /// Rewrites every non-trailing break in `message` as
    /// `LINE_SEPARATOR + indent + label + indicator`.
    ///
    /// A break forming the exact tail of the text is kept as-is. All other
    /// characters are copied through untouched.
    #[must_use]
    pub fn transform(&self, message: &str, indent: &str) -> String {
        if !self.enabled {
            return message.to_string();
        }

        let mut out = String::with_capacity(message.len());
        let mut chars = message.chars().peekable();

        while let Some(c) = chars.next() {
            let brk = match c {
                '\r' if chars.peek() == Some(&'\n') => {
                    chars.next();
                    LineBreak::CrLf
                }
                '\r' => LineBreak::Cr,
                '\n' => LineBreak::Lf,
                _ => {
                    out.push(c);
                    continue;
                }
            };

            if chars.peek().is_some() {
                out.push_str(LINE_SEPARATOR);
                out.push_str(indent);
                out.push_str(brk.label());
                out.push_str(&self.newline_indicator);
            } else {
                out.push_str(brk.as_str());
            }
        }

        out
    }
}
