#![forbid(unsafe_code)]

//! `supportlog` - readable, injection-safe formatting of single log records.
//!
//! Turns one structured record into one multi-line string:
//! - a grep-friendly header with UTC timestamp, thread id, level and an
//!   abbreviated source location
//! - the message, with embedded line breaks visibly labelled so user text
//!   can't forge extra log lines
//! - the attached error chain, root cause first, with shared frames elided and
//!   reference cycles cut off
//!
//! # Example
//!
//! ```
//! use supportlog::{Level, LogRecord, SupportFormatter};
//!
//! let formatter = SupportFormatter::new();
//! let record = LogRecord::new(Level::Info, Some("some message"))
//!     .millis(0)
//!     .thread_id(999)
//!     .source_class("some.pkg.Catcher")
//!     .source_method("robust");
//!
//! assert_eq!(
//!     formatter.format(&record),
//!     "1970-01-01 00:00:00.000+0000 [id=999]\tINFO\tsome.pkg.Catcher#robust: some message\n"
//! );
//! ```
//!
//! No I/O happens while formatting; writing the result anywhere is up to the caller.
//! The one exception is a [`Throwable`] that panics: the panic is caught, but the
//! process panic hook runs first and by default reports it on stderr.

pub mod config;
mod error;
pub mod fmt;
pub mod formatter;
pub mod internal;
pub mod level;
pub mod record;
pub mod trace;

pub use config::Config;
pub use error::Error;
pub use fmt::{LINE_SEPARATOR, MessageTransformer, abbreviate};
pub use formatter::{FormatterBuilder, SupportFormatter};
pub use level::Level;
pub use record::LogRecord;
pub use trace::{ErrorInfo, StackFrame, Throwable, print_stack_trace, render};
