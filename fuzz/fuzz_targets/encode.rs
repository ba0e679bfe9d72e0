#![no_main]

use libfuzzer_sys::fuzz_target;
use wordpiece_rs::builder::Builder;
use wordpiece_rs::encoder::tokenize_to_vec;

fn fixture_tokenizer() -> wordpiece_rs::Tokenizer {
    let mut lines = vec!["[PAD]", "[UNK]", "[CLS]", "[SEP]"];
    lines.extend(["hello", "world", "play", "##ing", "##ed", "foo", "bar"]);
    let mut text = lines.join("\n");
    text.push('\n');
    Builder::new().build_from_reader(text.as_bytes()).unwrap()
}

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    let tokenizer = fixture_tokenizer();
    let vocab = tokenizer.vocabulary().unwrap();

    let enc = tokenize_to_vec(vocab, &input, 32, Some(32)).unwrap();
    debug_assert_eq!(enc.input_ids.len(), 32);
    debug_assert_eq!(enc.input_ids[0], vocab.special.cls.0);
    debug_assert!(enc.token_type_ids.iter().all(|&t| t == 0));
});
