//! The structured input of one formatting call.

use crate::fmt::message;
use crate::level::Level;
use crate::trace::Throwable;
use chrono::Utc;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_ID: u64 = NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed);
}

/// Numeric id of the calling thread, unique for the life of the process.
///
/// `std::thread::ThreadId` has no stable integer form, so ids are handed out
/// in the order threads first ask for one.
#[must_use]
pub fn current_thread_id() -> u64 {
    THREAD_ID.with(|id| *id)
}

/// Everything the formatter prints for one log event. Owned by the caller;
/// formatting only borrows it.
#[derive(Clone, Default)]
pub struct LogRecord {
    pub level: Level,
    /// Milliseconds since the Unix epoch.
    pub millis: i64,
    pub thread_id: u64,
    /// Fallback source when no class was recorded.
    pub logger_name: Option<String>,
    pub source_class: Option<String>,
    pub source_method: Option<String>,
    pub message: Option<String>,
    /// Positional values for `{0}`, `{1}`, ... in `message`.
    pub parameters: Vec<String>,
    pub thrown: Option<Arc<dyn Throwable>>,
}

impl LogRecord {
    /// Stamped with the current time and the calling thread's id.
    #[must_use]
    pub fn new(level: Level, message: Option<&str>) -> Self {
        Self {
            level,
            millis: Utc::now().timestamp_millis(),
            thread_id: current_thread_id(),
            message: message.map(ToString::to_string),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn millis(mut self, millis: i64) -> Self {
        self.millis = millis;
        self
    }

    #[must_use]
    pub const fn thread_id(mut self, id: u64) -> Self {
        self.thread_id = id;
        self
    }

    #[must_use]
    pub fn logger_name(mut self, name: impl Into<String>) -> Self {
        self.logger_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn source_class(mut self, class: impl Into<String>) -> Self {
        self.source_class = Some(class.into());
        self
    }

    #[must_use]
    pub fn source_method(mut self, method: impl Into<String>) -> Self {
        self.source_method = Some(method.into());
        self
    }

    #[must_use]
    pub fn parameters<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters = params.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn thrown(mut self, error: Arc<dyn Throwable>) -> Self {
        self.thrown = Some(error);
        self
    }

    /// Message with parameters substituted, `None` when the record has no message.
    #[must_use]
    pub fn resolved_message(&self) -> Option<String> {
        self.message
            .as_deref()
            .map(|m| message::resolve(m, self.parameters.as_slice()))
    }

    /// Class name if recorded, else the logger name.
    #[must_use]
    pub fn source_name(&self) -> Option<&str> {
        self.source_class
            .as_deref()
            .or(self.logger_name.as_deref())
    }
}

impl fmt::Debug for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogRecord")
            .field("level", &self.level)
            .field("millis", &self.millis)
            .field("thread_id", &self.thread_id)
            .field("logger_name", &self.logger_name)
            .field("source_class", &self.source_class)
            .field("source_method", &self.source_method)
            .field("message", &self.message)
            .field("parameters", &self.parameters)
            .field("thrown", &self.thrown.as_ref().map(|t| t.summary()))
            .finish()
    }
}
