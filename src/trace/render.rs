//! Cause-chain rendering.
//!
//! Causes print before the error they caused, so the root cause sits at the
//! top and every later entry starts with `Caused: `. Suppressed errors nest one
//! tab deeper behind `Also:   `. Frames a cause shares with the error above it
//! are left out, and a node seen twice prints `<cycle to ...>` and stops.

use super::{StackFrame, Throwable, identity};
use crate::Error;
use crate::fmt::{LINE_SEPARATOR, MessageTransformer};
use std::collections::HashSet;
use std::io::Write;
use std::sync::Arc;

/// Rendering of an absent error.
pub const NO_DETAILS: &str = "No Exception details";

const CAUSED: &str = "Caused: ";
const ALSO: &str = "Also:   ";

/// Nodes already printed during one render. Every cause and suppressed error
/// reached is held here until the render ends, so an address can't be reused
/// by a later node built on demand.
#[derive(Default)]
struct Visited {
    ids: HashSet<*const ()>,
    held: Vec<Arc<dyn Throwable>>,
}

impl Visited {
    fn insert(&mut self, error: &dyn Throwable) -> bool {
        self.ids.insert(identity(error))
    }

    fn hold(&mut self, error: &Arc<dyn Throwable>) {
        self.held.push(Arc::clone(error));
    }
}

/// Renders cause chains, escaping every piece of error text through the
/// borrowed transformer.
#[derive(Debug, Clone, Copy)]
pub struct TraceRenderer<'a> {
    transformer: &'a MessageTransformer,
}

impl<'a> TraceRenderer<'a> {
    #[must_use]
    pub const fn new(transformer: &'a MessageTransformer) -> Self {
        Self { transformer }
    }

    /// Full chain for `error`, or [`NO_DETAILS`] when there is none.
    #[must_use]
    pub fn render(&self, error: Option<&dyn Throwable>) -> String {
        let Some(error) = error else {
            return NO_DETAILS.to_string();
        };
        let mut out = String::new();
        self.render_into(&mut out, error, None, "", &mut Visited::default());
        out
    }

    fn render_into(
        &self,
        out: &mut String,
        error: &dyn Throwable,
        higher: Option<&dyn Throwable>,
        prefix: &str,
        seen: &mut Visited,
    ) {
        if !seen.insert(error) {
            out.push_str("<cycle to ");
            out.push_str(&self.transformer.transform(&error.summary(), prefix));
            out.push('>');
            out.push_str(LINE_SEPARATOR);
            return;
        }

        if let Some(custom) = error.print_full_trace() {
            out.push_str(&self.transformer.transform(&custom, prefix));
            return;
        }

        let lower = error.cause();
        if let Some(lower) = &lower {
            seen.hold(lower);
            self.render_into(out, &**lower, Some(error), prefix, seen);
        }

        let nested = format!("{prefix}\t");
        for suppressed in error.suppressed() {
            seen.hold(&suppressed);
            out.push_str(prefix);
            out.push_str(ALSO);
            self.render_into(out, &*suppressed, Some(error), &nested, seen);
        }

        if lower.is_some() {
            out.push_str(prefix);
            out.push_str(CAUSED);
        }

        let mut summary = self.transformer.transform(&error.summary(), "");
        if let Some(lower) = &lower {
            // Summaries that already embed the cause as "...: <cause>" would
            // repeat the line printed just above.
            let suffix = format!(": {}", self.transformer.transform(&lower.summary(), prefix));
            if summary.ends_with(&suffix) {
                summary.truncate(summary.len() - suffix.len());
            }
        }
        out.push_str(&summary);
        out.push_str(LINE_SEPARATOR);

        let trace = error.stack_trace();
        let end = higher.map_or(trace.len(), |h| unshared_len(trace, h.stack_trace()));
        for frame in &trace[..end] {
            out.push_str(prefix);
            out.push_str("\tat ");
            out.push_str(&frame.to_string());
            out.push_str(LINE_SEPARATOR);
        }
    }
}

/// Number of leading frames of `trace` left once the tail it has in common
/// with `higher` is cut off.
fn unshared_len(trace: &[StackFrame], higher: &[StackFrame]) -> usize {
    let shared = trace
        .iter()
        .rev()
        .zip(higher.iter().rev())
        .take_while(|(a, b)| a == b)
        .count();
    trace.len() - shared
}

/// Renders with the default transformer.
#[must_use]
pub fn render(error: Option<&dyn Throwable>) -> String {
    TraceRenderer::new(&MessageTransformer::new()).render(error)
}

/// Writes the rendering, trailing whitespace trimmed, as a block of lines.
///
/// # Errors
/// I/O errors from `writer`.
pub fn print_stack_trace<W: Write + ?Sized>(
    error: Option<&dyn Throwable>,
    writer: &mut W,
) -> Result<(), Error> {
    writeln!(writer, "{}", render(error).trim_end())?;
    Ok(())
}
