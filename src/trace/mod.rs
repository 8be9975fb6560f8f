//! Error chains attached to records: the [`Throwable`] abstraction, a concrete
//! [`ErrorInfo`] implementation, and the renderer that prints a whole chain.

mod info;
mod render;

pub use info::ErrorInfo;
pub use render::{NO_DETAILS, TraceRenderer, print_stack_trace, render};

use std::fmt;
use std::sync::Arc;

/// One recorded call site.
///
/// Displays in the conventional `scope.method(File.java:123)` form so traces
/// stay familiar to anyone who has read a JVM stack trace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackFrame {
    pub declaring_scope: String,
    pub method: String,
    pub file: Option<String>,
    pub line: Option<u32>,
}

impl StackFrame {
    #[must_use]
    pub fn new(
        declaring_scope: impl Into<String>,
        method: impl Into<String>,
        file: impl Into<String>,
        line: u32,
    ) -> Self {
        Self {
            declaring_scope: declaring_scope.into(),
            method: method.into(),
            file: Some(file.into()),
            line: Some(line),
        }
    }

    /// Frame without source information, printed as `(Unknown Source)`.
    #[must_use]
    pub fn unknown(declaring_scope: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            declaring_scope: declaring_scope.into(),
            method: method.into(),
            file: None,
            line: None,
        }
    }
}

impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}(", self.declaring_scope, self.method)?;
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, "{file}:{line}")?,
            (Some(file), None) => f.write_str(file)?,
            (None, _) => f.write_str("Unknown Source")?,
        }
        f.write_str(")")
    }
}

/// Anything that can be rendered as a cause chain.
///
/// Causes and suppressed errors are handed out as `Arc`s so chains may share
/// nodes, and may even loop back on themselves; the renderer tracks node
/// identity by address and stops at the first repeat.
pub trait Throwable: Send + Sync {
    /// One-line `Type: message` summary.
    fn summary(&self) -> String;

    /// Frames captured when the error was created, innermost first.
    fn stack_trace(&self) -> &[StackFrame];

    fn cause(&self) -> Option<Arc<dyn Throwable>> {
        None
    }

    /// Errors recorded alongside this one, e.g. while cleaning up after it.
    fn suppressed(&self) -> Vec<Arc<dyn Throwable>> {
        Vec::new()
    }

    /// Custom full-trace rendering. When `Some`, the renderer prints this text
    /// (line breaks escaped) instead of walking frames, cause and suppressed
    /// errors for this node.
    fn print_full_trace(&self) -> Option<String> {
        None
    }
}

/// Address of the value behind a trait object, used as its identity.
pub(crate) fn identity(t: &dyn Throwable) -> *const () {
    std::ptr::from_ref(t).cast::<()>()
}
