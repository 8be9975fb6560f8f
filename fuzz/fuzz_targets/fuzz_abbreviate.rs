#![no_main]
use libfuzzer_sys::fuzz_target;
use supportlog::abbreviate;

fuzz_target!(|input: (&str, u8)| {
    let (name, width) = input;
    let out = abbreviate(Some(name), usize::from(width));

    // Never grows, and the last segment survives intact
    assert!(out.chars().count() <= name.chars().count());
    if let Some(last) = name.rsplit('.').next() {
        assert!(out.ends_with(last));
    }
});
