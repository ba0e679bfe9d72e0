//! Greedy longest-prefix / longest-suffix WordPiece matching.

use crate::normalize::{normalize, strip_diacritics};
use crate::pretokenize::clean_word;
use crate::vocab::Vocabulary;

/// Upper bound on subword pieces emitted for a single word. A word can never
/// decompose into more pieces than it has code points, so this is generous
/// for any vocabulary built with a realistic `max_chars_per_word`.
pub const MAX_WORD_PIECES: usize = 128;

/// Attempt one greedy prefix + suffix-loop decomposition of `word` into
/// `sink`. Returns `None` if no prefix matched, or if a suffix gap could not
/// be bridged (the reference WordPiece algorithm discards any partial output
/// in that case and falls through to unknown handling).
fn try_decompose(vocab: &Vocabulary, word: &str, sink: &mut [u32; MAX_WORD_PIECES]) -> Option<usize> {
    let (prefix_len, prefix_id) = vocab.longest_prefix(word)?;
    sink[0] = prefix_id;
    let mut written = 1;
    let mut remaining = &word[prefix_len..];

    while !remaining.is_empty() {
        if written >= MAX_WORD_PIECES {
            return None;
        }
        let (suffix_len, suffix_id) = vocab.longest_suffix(remaining)?;
        sink[written] = suffix_id;
        written += 1;
        remaining = &remaining[suffix_len..];
    }

    Some(written)
}

/// Decompose `word` into `sink`, returning the number of ids written.
///
/// Applies the unknown-handling cascade (re-clean, re-normalize,
/// strip-diacritics, `[UNK]`) when a direct match fails. A word that cleans
/// to nothing after re-cleaning (step a) produces zero ids, not `[UNK]`.
pub fn match_word(vocab: &Vocabulary, word: &str, sink: &mut [u32; MAX_WORD_PIECES]) -> usize {
    if word.chars().count() > vocab.max_chars_per_word {
        sink[0] = vocab.special.unk.0;
        return 1;
    }

    if let Some(n) = try_decompose(vocab, word, sink) {
        return n;
    }

    // (a) re-clean
    let cleaned = clean_word(word);
    if cleaned != word {
        if cleaned.is_empty() {
            return 0;
        }
        if let Some(n) = try_decompose(vocab, &cleaned, sink) {
            return n;
        }
    }

    // (b) re-normalize
    let normalized = normalize(vocab.normalization_form, word);
    if normalized != word {
        if let Some(n) = try_decompose(vocab, &normalized, sink) {
            return n;
        }
    }

    // (c) strip diacritics
    let stripped = strip_diacritics(word, vocab.normalization_form);
    if stripped != word {
        if let Some(n) = try_decompose(vocab, &stripped, sink) {
            return n;
        }
    }

    // (d) unknown
    sink[0] = vocab.special.unk.0;
    1
}
