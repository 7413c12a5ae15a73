#![no_main]

use booktools::filter::{StderrFilter, KATEX_VERSION_WARNING};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let filter = StderrFilter::katex();
    let out = filter.filter_bytes(data);

    // Output never grows by more than one trailing newline
    assert!(out.len() <= data.len() + 1);

    // No surviving line carries the warning
    let needle = KATEX_VERSION_WARNING.as_bytes();
    assert!(!out.windows(needle.len()).any(|w| w == needle));
});
