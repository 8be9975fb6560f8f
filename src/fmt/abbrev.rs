//! Shortens dotted names like `org.example.plugins.workflow.StepExecution` so the
//! source column stays readable. Cosmetic only: the last segment is never touched.

/// Printed when a record has neither a source class nor a logger name.
pub const UNKNOWN_SOURCE: &str = "-";

/// Only the first this-many dots are considered when trimming.
const MAX_SEGMENTS: usize = 16;

/// Abbreviates `name` towards `target_width` characters.
///
/// Names already shorter than the target, and names without dots, come back
/// unchanged. Otherwise interior segments are cut down to their first
/// character, earliest segment first, until enough characters are saved.
#[must_use]
pub fn abbreviate(name: Option<&str>, target_width: usize) -> String {
    let Some(name) = name else {
        return UNKNOWN_SOURCE.to_string();
    };

    let chars: Vec<char> = name.chars().collect();
    let len = chars.len();
    if len < target_width {
        return name.to_string();
    }

    let dots: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == '.')
        .map(|(i, _)| i)
        .take(MAX_SEGMENTS)
        .collect();
    let Some(&last_dot) = dots.last() else {
        return name.to_string();
    };

    let mut required_savings = len.cast_signed() - target_width.cast_signed();
    let mut out = String::with_capacity(target_width);
    let mut segment_start = 0;

    for &dot in &dots {
        let available = dot - segment_start;
        let keep = if required_savings > 0 {
            available.min(1)
        } else {
            available
        };
        required_savings -= (available - keep).cast_signed();

        if segment_start > 0 {
            out.push('.');
        }
        out.extend(&chars[segment_start..segment_start + keep]);
        segment_start = dot + 1;
    }

    out.extend(&chars[last_dot..]);
    out
}
