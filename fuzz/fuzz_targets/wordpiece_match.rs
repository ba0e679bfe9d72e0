#![no_main]

use libfuzzer_sys::fuzz_target;
use wordpiece_rs::builder::Builder;
use wordpiece_rs::wordpiece::{match_word, MAX_WORD_PIECES};

fn fixture_vocab() -> wordpiece_rs::Vocabulary {
    let mut lines = vec!["[PAD]", "[UNK]", "[CLS]", "[SEP]"];
    lines.extend(["hello", "world", "play", "##ing", "##ed", "foo", "bar"]);
    let mut text = lines.join("\n");
    text.push('\n');
    Builder::new()
        .build_from_reader(text.as_bytes())
        .unwrap()
        .vocabulary()
        .cloned()
        .unwrap()
}

fuzz_target!(|data: &[u8]| {
    let word = String::from_utf8_lossy(data);
    let vocab = fixture_vocab();
    let mut sink = [0u32; MAX_WORD_PIECES];
    let n = match_word(&vocab, &word, &mut sink);
    debug_assert!(n <= MAX_WORD_PIECES);
    for &id in &sink[..n] {
        debug_assert!(vocab.token_literal(id).is_some());
    }
});
