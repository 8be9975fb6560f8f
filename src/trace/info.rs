//! Ready-made [`Throwable`] for callers that don't have their own error type.

use super::{StackFrame, Throwable, identity};
use crate::Error;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// Snapshot of an error: summary, frames, a cause that can be set once, and
/// an append-only list of suppressed errors.
///
/// The cause and suppressed list can be filled in after the node is shared,
/// which is also how a cyclic chain gets built.
pub struct ErrorInfo {
    summary: String,
    frames: Vec<StackFrame>,
    cause: OnceLock<Arc<dyn Throwable>>,
    suppressed: Mutex<Vec<Arc<dyn Throwable>>>,
}

impl ErrorInfo {
    /// Error whose one-line summary is exactly `summary`.
    #[must_use]
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            frames: Vec::new(),
            cause: OnceLock::new(),
            suppressed: Mutex::new(Vec::new()),
        }
    }

    /// `Type: message` summary, or just `Type` when the message is empty.
    #[must_use]
    pub fn with_message(type_name: &str, message: &str) -> Self {
        if message.is_empty() {
            Self::new(type_name)
        } else {
            Self::new(format!("{type_name}: {message}"))
        }
    }

    #[must_use]
    pub fn frame(mut self, frame: StackFrame) -> Self {
        self.frames.push(frame);
        self
    }

    #[must_use]
    pub fn frames(mut self, frames: impl IntoIterator<Item = StackFrame>) -> Self {
        self.frames.extend(frames);
        self
    }

    /// Sets the cause while the error is still being built.
    #[must_use]
    pub fn with_cause(self, cause: Arc<dyn Throwable>) -> Self {
        // Fresh OnceLock: this set cannot fail.
        let _ = self.cause.set(cause);
        self
    }

    /// Sets the cause of an error that may already be shared.
    ///
    /// # Errors
    /// `CauseAlreadySet` if a cause was set before, `SelfCausation` if `cause`
    /// is this very error.
    pub fn init_cause(&self, cause: Arc<dyn Throwable>) -> Result<(), Error> {
        if identity(&*cause) == identity(self) {
            return Err(Error::SelfCausation(self.summary.clone()));
        }
        self.cause
            .set(cause)
            .map_err(|_| Error::CauseAlreadySet(self.summary.clone()))
    }

    /// Records an error that occurred while handling this one.
    ///
    /// # Errors
    /// `SelfSuppression` if `suppressed` is this very error.
    pub fn add_suppressed(&self, suppressed: Arc<dyn Throwable>) -> Result<(), Error> {
        if identity(&*suppressed) == identity(self) {
            return Err(Error::SelfSuppression(self.summary.clone()));
        }
        self.suppressed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(suppressed);
        Ok(())
    }

    /// Snapshots a Rust error and its `source()` chain, outermost first.
    /// Rust errors carry no structured frames, so every node has none.
    #[must_use]
    pub fn capture(err: &(dyn std::error::Error + 'static)) -> Arc<Self> {
        let node = Self::new(err.to_string());
        Arc::new(match err.source() {
            Some(source) => node.with_cause(Self::capture(source)),
            None => node,
        })
    }
}

impl Throwable for ErrorInfo {
    fn summary(&self) -> String {
        self.summary.clone()
    }

    fn stack_trace(&self) -> &[StackFrame] {
        &self.frames
    }

    fn cause(&self) -> Option<Arc<dyn Throwable>> {
        self.cause.get().cloned()
    }

    fn suppressed(&self) -> Vec<Arc<dyn Throwable>> {
        self.suppressed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl fmt::Debug for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorInfo")
            .field("summary", &self.summary)
            .field("frames", &self.frames.len())
            .field("has_cause", &self.cause.get().is_some())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary)
    }
}
