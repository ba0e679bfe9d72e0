#![no_main]

use libfuzzer_sys::fuzz_target;
use wordpiece_rs::vocab::{LoadConfig, Vocabulary};

fuzz_target!(|data: &[u8]| {
    // Fuzzing the loader directly: malformed input must return an error,
    // never panic.
    let _ = Vocabulary::from_reader(data, LoadConfig::default());
});
