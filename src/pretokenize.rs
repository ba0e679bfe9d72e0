//! Streaming pre-tokenizer: cleans, splits and delivers word spans to a visitor.

use crate::unicode::{is_cjk, is_control, is_format, is_private_use, is_punctuation, is_replacement, is_whitespace};

/// Visitor control, returned from the callback passed to [`pretokenize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

fn is_dropped(c: char) -> bool {
    is_control(c) && !is_whitespace(c) || is_format(c) || is_private_use(c) || is_replacement(c)
}

/// Remove control/format/private-use/replacement characters, preserving
/// whitespace and ordinary text. Used both by the main walk and by the
/// WordPiece matcher's re-clean fallback.
#[must_use]
pub fn clean_word(word: &str) -> String {
    word.chars().filter(|&c| !is_dropped(c)).collect()
}

/// Walk `text`, delivering cleaned, cased, split word spans to `visit` in
/// input order. Stops early if `visit` returns [`Flow::Stop`].
///
/// `lowercase` applies full Unicode case mapping to each chunk before
/// punctuation/CJK splitting, matching the order a reference BERT
/// pre-tokenizer applies these steps.
pub fn pretokenize<F>(text: &str, lowercase: bool, mut visit: F)
where
    F: FnMut(&str) -> Flow,
{
    let cleaned: String = text.chars().filter(|&c| !is_dropped(c)).collect();

    for chunk in cleaned.split(is_whitespace).filter(|s| !s.is_empty()) {
        let cased;
        let chunk: &str = if lowercase {
            cased = chunk.chars().flat_map(char::to_lowercase).collect::<String>();
            &cased
        } else {
            chunk
        };

        let mut current = String::new();
        for c in chunk.chars() {
            if is_punctuation(c) || is_cjk(c) {
                if !current.is_empty() {
                    if visit(&current) == Flow::Stop {
                        return;
                    }
                    current.clear();
                }
                if visit(&c.to_string()) == Flow::Stop {
                    return;
                }
            } else {
                current.push(c);
            }
        }
        if !current.is_empty() && visit(&current) == Flow::Stop {
            return;
        }
    }
}
