//! Tests for line-break escaping.

use supportlog::{LINE_SEPARATOR, MessageTransformer};

fn transform(text: &str) -> String {
    MessageTransformer::new().transform(text, "")
}

#[test]
fn break_free_text_is_unchanged() {
    let t = MessageTransformer::new();
    for text in ["", "plain", "tabs\tand spaces", "ünïcödé ✓", "[LF]> looks like a label"] {
        assert_eq!(t.transform(text, ""), text);
        assert_eq!(t.transform(text, "\t\t"), text);
    }
}

#[test]
fn mid_string_breaks_are_labelled() {
    assert_eq!(transform("foo\nbar"), format!("foo{LINE_SEPARATOR}[LF]> bar"));
    assert_eq!(transform("foo\rbar"), format!("foo{LINE_SEPARATOR}[CR]> bar"));
    assert_eq!(transform("foo\r\nbar"), format!("foo{LINE_SEPARATOR}[CRLF]> bar"));
}

#[test]
fn trailing_break_is_kept_verbatim() {
    assert_eq!(transform("done\n"), "done\n");
    assert_eq!(transform("done\r"), "done\r");
    assert_eq!(transform("done\r\n"), "done\r\n");
    assert_eq!(transform("\n"), "\n");
}

#[test]
fn only_the_last_break_counts_as_trailing() {
    assert_eq!(transform("\n\n"), format!("{LINE_SEPARATOR}[LF]> \n"));
}

#[test]
fn indent_goes_before_label() {
    let t = MessageTransformer::new();
    assert_eq!(t.transform("a\nb", "\t"), format!("a{LINE_SEPARATOR}\t[LF]> b"));
}

#[test]
fn one_label_per_input_break() {
    let out = transform("a\nb\r\nc\rd\n");
    assert_eq!(out.matches("[LF]").count(), 1);
    assert_eq!(out.matches("[CRLF]").count(), 1);
    assert_eq!(out.matches("[CR]").count(), 1);
    assert!(out.ends_with("d\n"));
}

#[test]
fn forged_record_is_neutralised() {
    let out = transform("ok\n1970-01-01 00:00:00.000+0000 [id=1]\tSEVERE\tfake: pwned");
    assert!(
        out.lines()
            .skip(1)
            .all(|line| line.starts_with("[LF]> "))
    );
}

#[test]
fn disabled_passes_through() {
    let t = MessageTransformer::new().enabled(false);
    assert!(!t.is_enabled());
    assert_eq!(t.transform("a\nb\r\nc", "\t"), "a\nb\r\nc");
}

#[test]
fn custom_indicator() {
    let t = MessageTransformer::new().newline_indicator("| ");
    assert_eq!(t.indicator(), "| ");
    assert_eq!(t.transform("foo\nbar", ""), format!("foo{LINE_SEPARATOR}[LF]| bar"));
}

fn labels(text: &str) -> usize {
    text.matches("[LF]").count() + text.matches("[CR]").count() + text.matches("[CRLF]").count()
}

#[test]
fn second_pass_labels_only_inserted_separators() {
    // (input, breaks that are not the final character)
    let cases = [
        ("a\nb\r\nc\rd", 3),
        ("x\n\ny\n", 2),
        ("\r\n\r\n", 1),
        ("one\rtwo\r", 1),
        ("no breaks", 0),
    ];
    for (input, breaks) in cases {
        let once = transform(input);
        let twice = transform(&once);
        assert_eq!(labels(&once), breaks, "{input:?}");
        // Each label from the first pass sits behind one inserted separator.
        assert_eq!(labels(&twice), labels(&once) + breaks, "{input:?}");
    }
}
