//! Tests for cause-chain rendering.

use std::sync::Arc;
use supportlog::trace::{NO_DETAILS, Throwable};
use supportlog::{ErrorInfo, LINE_SEPARATOR, StackFrame, render};

fn lines(lines: &[&str]) -> String {
    lines.iter().map(|l| format!("{l}{LINE_SEPARATOR}")).collect()
}

fn phony() -> ErrorInfo {
    ErrorInfo::new("PhonyException: oops").frames([
        StackFrame::new("some.other.pkg.Thrower", "buggy", "Thrower.java", 123),
        StackFrame::new("some.pkg.Catcher", "robust", "Catcher.java", 456),
    ])
}

fn frame(method: &str, line: u32) -> StackFrame {
    StackFrame::new("X", method, "X.java", line)
}

#[test]
fn absent_error() {
    assert_eq!(render(None), NO_DETAILS);
}

#[test]
fn single_error_with_frames() {
    assert_eq!(
        render(Some(&phony())),
        lines(&[
            "PhonyException: oops",
            "\tat some.other.pkg.Thrower.buggy(Thrower.java:123)",
            "\tat some.pkg.Catcher.robust(Catcher.java:456)",
        ])
    );
}

#[test]
fn cause_prints_first_with_shared_frames_elided_and_suffix_stripped() {
    let cause = ErrorInfo::new("java.io.IOException: disk full").frames([
        StackFrame::new("F", "write", "F.java", 10),
        StackFrame::new("S", "save", "S.java", 20),
        StackFrame::new("M", "main", "M.java", 30),
    ]);
    let outer = ErrorInfo::new("java.lang.RuntimeException: java.io.IOException: disk full")
        .frames([
            StackFrame::new("S", "save", "S.java", 21),
            StackFrame::new("M", "main", "M.java", 30),
        ])
        .with_cause(Arc::new(cause));

    assert_eq!(
        render(Some(&outer)),
        lines(&[
            "java.io.IOException: disk full",
            "\tat F.write(F.java:10)",
            "\tat S.save(S.java:20)",
            "Caused: java.lang.RuntimeException",
            "\tat S.save(S.java:21)",
            "\tat M.main(M.java:30)",
        ])
    );
}

#[test]
fn summary_kept_when_cause_is_not_an_exact_suffix() {
    let outer = ErrorInfo::new("Wrapper: failed").with_cause(Arc::new(ErrorInfo::new("Inner: boom")));
    assert_eq!(
        render(Some(&outer)),
        lines(&["Inner: boom", "Caused: Wrapper: failed"])
    );
}

#[test]
fn suppressed_errors_nest_one_tab_deeper() {
    let primary = ErrorInfo::new("Primary: p").frames([frame("a", 1), frame("main", 9)]);
    let cleanup = ErrorInfo::new("Cleanup: c").frames([frame("close", 2), frame("main", 9)]);
    primary.add_suppressed(Arc::new(cleanup)).unwrap();

    assert_eq!(
        render(Some(&primary)),
        lines(&[
            "Also:   Cleanup: c",
            "\t\tat X.close(X.java:2)",
            "Primary: p",
            "\tat X.a(X.java:1)",
            "\tat X.main(X.java:9)",
        ])
    );
}

#[test]
fn cause_cycle_terminates_with_one_marker() {
    let a = Arc::new(ErrorInfo::new("A: a"));
    let b = Arc::new(ErrorInfo::new("B: b").with_cause(a.clone()));
    a.init_cause(b).unwrap();

    let out = render(Some(&*a));
    assert_eq!(out.matches("<cycle to ").count(), 1);
    assert_eq!(
        out,
        lines(&["<cycle to A: a>", "Caused: B: b", "Caused: A: a"])
    );
}

#[test]
fn cycle_through_suppressed_uses_prefix_for_marker() {
    let a = Arc::new(ErrorInfo::new("A\nmore"));
    let b = Arc::new(ErrorInfo::new("B"));
    b.init_cause(a.clone()).unwrap();
    a.add_suppressed(b).unwrap();

    assert_eq!(
        render(Some(&*a)),
        format!(
            "Also:   <cycle to A{LINE_SEPARATOR}\t[LF]> more>{LINE_SEPARATOR}\
             \tCaused: B{LINE_SEPARATOR}\
             A{LINE_SEPARATOR}[LF]> more{LINE_SEPARATOR}"
        )
    );
}

#[test]
fn equal_contents_are_not_a_cycle() {
    let inner = ErrorInfo::new("Same: x");
    let outer = ErrorInfo::new("Same: x").with_cause(Arc::new(inner));
    let out = render(Some(&outer));
    assert!(!out.contains("<cycle to"));
    assert_eq!(out, lines(&["Same: x", "Caused: Same: x"]));
}

/// Builds a fresh cause object on every `cause()` call, like an adapter over
/// an error type that doesn't store its chain as shared nodes.
struct OnDemand {
    summary: String,
    cause: Option<String>,
}

impl OnDemand {
    fn new(summary: &str, cause: Option<&str>) -> Self {
        Self {
            summary: summary.to_string(),
            cause: cause.map(str::to_string),
        }
    }
}

impl Throwable for OnDemand {
    fn summary(&self) -> String {
        self.summary.clone()
    }

    fn stack_trace(&self) -> &[StackFrame] {
        &[]
    }

    fn cause(&self) -> Option<Arc<dyn Throwable>> {
        self.cause
            .as_deref()
            .map(|c| Arc::new(Self::new(c, None)) as Arc<dyn Throwable>)
    }
}

#[test]
fn causes_built_on_demand_are_never_cycles() {
    let primary = ErrorInfo::new("Primary");
    for n in 0..50 {
        primary
            .add_suppressed(Arc::new(OnDemand::new(&format!("S{n}"), Some(&format!("C{n}")))))
            .unwrap();
    }

    let out = render(Some(&primary));
    assert!(!out.contains("<cycle to"), "{out}");

    let mut expected = Vec::new();
    for n in 0..50 {
        expected.push(format!("Also:   C{n}"));
        expected.push(format!("\tCaused: S{n}"));
    }
    expected.push("Primary".to_string());
    let expected: Vec<&str> = expected.iter().map(String::as_str).collect();
    assert_eq!(out, lines(&expected));
}

#[test]
fn summary_line_breaks_are_escaped() {
    let err = ErrorInfo::new("Bad: line one\nline two");
    assert_eq!(
        render(Some(&err)),
        lines(&[format!("Bad: line one{LINE_SEPARATOR}[LF]> line two").as_str()])
    );
}

struct CustomTrace;

impl Throwable for CustomTrace {
    fn summary(&self) -> String {
        "CustomTrace".to_string()
    }

    fn stack_trace(&self) -> &[StackFrame] {
        &[]
    }

    fn print_full_trace(&self) -> Option<String> {
        Some("Custom trace\nline two\n".to_string())
    }
}

#[test]
fn custom_trace_replaces_generic_rendering() {
    let outer = ErrorInfo::new("Outer").with_cause(Arc::new(CustomTrace));
    assert_eq!(
        render(Some(&outer)),
        format!("Custom trace{LINE_SEPARATOR}[LF]> line two\nCaused: Outer{LINE_SEPARATOR}")
    );
}

#[test]
fn print_stack_trace_trims_and_terminates() {
    let mut buf = Vec::new();
    supportlog::print_stack_trace(Some(&phony()), &mut buf).unwrap();
    let expected = format!(
        "PhonyException: oops{LINE_SEPARATOR}\
         \tat some.other.pkg.Thrower.buggy(Thrower.java:123){LINE_SEPARATOR}\
         \tat some.pkg.Catcher.robust(Catcher.java:456)\n"
    );
    assert_eq!(String::from_utf8(buf).unwrap(), expected);
}

#[test]
fn print_stack_trace_of_nothing() {
    let mut buf = Vec::new();
    supportlog::print_stack_trace(None, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "No Exception details\n");
}
