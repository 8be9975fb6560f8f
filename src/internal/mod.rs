//! supportlog's own diagnostics, formatted by the same `SupportFormatter`
//! it offers to callers and written to stderr.
//!
//! Uses `OnceLock` so the channel is set up exactly once, no matter how many
//! entry points race to call `init_with_config`. Off unless the config enables
//! it; calls made before init are silently dropped.

use crate::config::Config;
use crate::formatter::SupportFormatter;
use crate::level::Level;
use crate::record::LogRecord;
use std::io::Write;
use std::sync::OnceLock;

struct Diagnostics {
    min_level: Level,
    formatter: SupportFormatter,
}

static DIAGNOSTICS: OnceLock<Option<Diagnostics>> = OnceLock::new();

/// Only the first call takes effect; later calls are no-ops.
pub fn init_with_config(config: &Config) {
    let was_init = DIAGNOSTICS.get().is_some();
    DIAGNOSTICS.get_or_init(|| {
        config.diagnostics.enabled.then(|| Diagnostics {
            min_level: config.parse_level(),
            formatter: SupportFormatter::from_config(config),
        })
    });
    if !was_init {
        fine(
            "INTERNAL",
            &format!(
                "Diagnostics ready, transform {}",
                if config.transform.disabled {
                    "disabled"
                } else {
                    "enabled"
                }
            ),
        );
    }
}

/// Lowest level that gets written, `None` while the channel is off or not
/// yet initialised.
#[must_use]
pub fn threshold() -> Option<Level> {
    DIAGNOSTICS.get()?.as_ref().map(|diag| diag.min_level)
}

fn log(level: Level, source: &str, msg: &str) {
    let Some(Some(diag)) = DIAGNOSTICS.get() else {
        return;
    };
    if level < diag.min_level {
        return;
    }
    let record = LogRecord::new(level, Some(msg)).logger_name(source);
    let line = diag.formatter.format(&record);
    let _ = std::io::stderr().lock().write_all(line.as_bytes());
}

/// Step-by-step detail, e.g. which config file was picked.
pub fn fine(source: &str, msg: &str) {
    log(Level::Fine, source, msg);
}

/// Normal milestones, e.g. a config file was loaded.
pub fn info(source: &str, msg: &str) {
    log(Level::Info, source, msg);
}

/// Recoverable trouble, e.g. a trace that could not be rendered.
pub fn warning(source: &str, msg: &str) {
    log(Level::Warning, source, msg);
}
