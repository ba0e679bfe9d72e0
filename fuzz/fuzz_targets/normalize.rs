#![no_main]

use libfuzzer_sys::fuzz_target;
use wordpiece_rs::normalize::{normalize, strip_diacritics, Form};

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);

    for form in [Form::Nfc, Form::Nfd, Form::Nfkc, Form::Nfkd] {
        let _ = normalize(form, &s);
    }

    let stripped = strip_diacritics(&s, Form::Nfc);
    // Stripping twice should be a no-op.
    let stripped_again = strip_diacritics(&stripped, Form::Nfc);
    debug_assert_eq!(stripped, stripped_again);
});
