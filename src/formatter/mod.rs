//! The record formatter: one `LogRecord` in, one newline-terminated string out.
//!
//! ```text
//! 1970-01-01 00:00:00.000+0000 [id=999]\tWARNING\tsome.pkg.Catcher#robust: failed
//! PhonyException: oops
//! \tat some.other.pkg.Thrower.buggy(Thrower.java:123)
//! ```

mod builder;

pub use builder::FormatterBuilder;

use crate::config::Config;
use crate::fmt::{self, MessageTransformer};
use crate::internal;
use crate::record::LogRecord;
use crate::trace::{Throwable, TraceRenderer};
use std::panic::{self, AssertUnwindSafe};

/// Source column width when a method name follows the class.
pub const METHOD_SOURCE_WIDTH: usize = 32;
/// Source column width for a class on its own.
pub const CLASS_SOURCE_WIDTH: usize = 40;

/// Immutable after construction, so a single instance can format records from
/// any number of threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportFormatter {
    transformer: MessageTransformer,
}

impl SupportFormatter {
    /// Escaping on, `"> "` marker. Ignores the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> FormatterBuilder {
        FormatterBuilder::new()
    }

    /// Takes both toggles from an already-loaded config.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::builder()
            .transform(!config.transform.disabled)
            .newline_indicator(config.transform.newline_indicator.clone())
            .build()
    }

    /// Never fails and never panics out: a trace that can't be rendered is
    /// dropped and the header line is still returned.
    ///
    /// A panic inside a [`Throwable`] still runs the process panic hook first.
    /// The default hook prints `thread '...' panicked at ...` with the raw,
    /// unescaped payload to stderr; install a quiet hook with
    /// [`std::panic::set_hook`] if that output must not appear.
    #[must_use]
    pub fn format(&self, record: &LogRecord) -> String {
        let mut out = format!(
            "{} [id={}]\t{}\t",
            fmt::format_millis(record.millis),
            record.thread_id,
            record.level.name()
        );

        let source = record.source_name();
        if let Some(method) = &record.source_method {
            out.push_str(&fmt::abbreviate(source, METHOD_SOURCE_WIDTH));
            out.push('#');
            out.push_str(method);
        } else {
            out.push_str(&fmt::abbreviate(source, CLASS_SOURCE_WIDTH));
        }

        if let Some(message) = record.resolved_message() {
            out.push_str(": ");
            out.push_str(&self.transformer.transform(&message, ""));
        }

        out.push('\n');

        if let Some(thrown) = &record.thrown {
            let rendered = panic::catch_unwind(AssertUnwindSafe(|| {
                self.render_trace(Some(&**thrown))
            }));
            match rendered {
                Ok(trace) => out.push_str(&trace),
                Err(_) => internal::warning(
                    "FORMATTER",
                    "Stack trace rendering failed, record emitted without it",
                ),
            }
        }

        out
    }

    /// Escapes line breaks in `message` with this formatter's settings.
    #[must_use]
    pub fn transform(&self, message: &str, indent: &str) -> String {
        self.transformer.transform(message, indent)
    }

    /// Cause chain of `error` with this formatter's settings.
    #[must_use]
    pub fn render_trace(&self, error: Option<&dyn Throwable>) -> String {
        TraceRenderer::new(&self.transformer).render(error)
    }

    #[must_use]
    pub const fn transformer(&self) -> &MessageTransformer {
        &self.transformer
    }
}
