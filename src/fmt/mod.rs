//! Text-level building blocks of a formatted record: break escaping, name
//! abbreviation, parameter substitution and timestamps.

mod abbrev;
pub mod message;
mod time;
mod transform;

pub use abbrev::{UNKNOWN_SOURCE, abbreviate};
pub use message::{MessageSegment, MessageTemplate};
pub use time::{TIMESTAMP_FORMAT, format_millis};
pub use transform::{DEFAULT_NEWLINE_INDICATOR, LINE_SEPARATOR, LineBreak, MessageTransformer};
