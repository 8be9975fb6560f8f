#![no_main]
use libfuzzer_sys::fuzz_target;
use supportlog::MessageTransformer;

fuzz_target!(|data: &str| {
    let out = MessageTransformer::new().transform(data, "\t");

    // Without breaks the text must come back untouched
    if !data.contains(['\n', '\r']) {
        assert_eq!(out, data);
    }

    // Every line after the first starts with a label; only the single
    // trailing break is left as-is
    let body = out.trim_end_matches(['\n', '\r']);
    for line in body.lines().skip(1) {
        assert!(line.starts_with("\t["), "unlabelled line: {line:?}");
    }
});
