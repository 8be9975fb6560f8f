#![no_main]
use libfuzzer_sys::fuzz_target;
use supportlog::fmt::{MessageTemplate, message};

fuzz_target!(|data: &str| {
    // Must not panic on any pattern
    let template = MessageTemplate::parse(data);
    let _ = template.render(&["a", "b\nc", ""]);

    // Without parameters nothing is substituted
    let empty: [&str; 0] = [];
    assert_eq!(message::resolve(data, &empty), data);
});
