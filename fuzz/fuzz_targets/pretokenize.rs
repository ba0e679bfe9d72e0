#![no_main]

use libfuzzer_sys::fuzz_target;
use wordpiece_rs::pretokenize::{pretokenize, Flow};

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);

    let mut words = Vec::new();
    pretokenize(&s, true, |w| {
        words.push(w.to_string());
        Flow::Continue
    });

    for w in &words {
        debug_assert!(!w.is_empty());
        debug_assert!(!w.chars().any(char::is_whitespace));
    }
});
