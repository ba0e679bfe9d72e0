//! Immutable vocabulary: two char-tries plus the reserved special tokens.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::normalize::Form;
use crate::Error;

const CONTINUATION_PREFIX: &str = "##";

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    token_id: Option<u32>,
}

/// A trie over `char` supporting single-pass longest-prefix lookup.
#[derive(Debug, Default)]
struct Trie {
    root: TrieNode,
}

impl Trie {
    fn insert(&mut self, key: &str, id: u32) {
        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_default();
        }
        node.token_id = Some(id);
    }

    /// Longest prefix of `text` present in the trie, as `(byte_len, id)`.
    fn longest_prefix(&self, text: &str) -> Option<(usize, u32)> {
        let mut node = &self.root;
        let mut best: Option<(usize, u32)> = None;
        let mut byte_len = 0;
        for c in text.chars() {
            match node.children.get(&c) {
                Some(next) => {
                    byte_len += c.len_utf8();
                    node = next;
                    if let Some(id) = node.token_id {
                        best = Some((byte_len, id));
                    }
                }
                None => break,
            }
        }
        best
    }
}

/// Special token ids and literals, resolved at load time.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialTokens {
    pub unk: (u32, String),
    pub cls: (u32, String),
    pub sep: (u32, String),
    pub pad: (u32, String),
}

/// A loaded, read-only vocabulary. Cheap to clone (ids are small; consider
/// wrapping in an `Arc` at the call site for zero-copy sharing across
/// threads, as [`crate::encoder::tokenize_batch`] does internally).
#[derive(Debug, Clone)]
pub struct Vocabulary {
    prefix: std::sync::Arc<Trie>,
    suffix: std::sync::Arc<Trie>,
    id_to_token: std::sync::Arc<Vec<String>>,
    pub special: SpecialTokens,
    pub lowercase_input: bool,
    pub normalization_form: Form,
    pub max_chars_per_word: usize,
}

/// Configuration consumed by [`Vocabulary::from_reader`], mirroring what
/// [`crate::builder::Builder`] accumulates before calling it.
pub struct LoadConfig {
    pub lowercase_input: bool,
    pub normalization_form: Form,
    pub max_chars_per_word: usize,
    pub unk_token: String,
    pub cls_token: String,
    pub sep_token: String,
    pub pad_token: String,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            lowercase_input: true,
            normalization_form: Form::Nfd,
            max_chars_per_word: 100,
            unk_token: "[UNK]".to_string(),
            cls_token: "[CLS]".to_string(),
            sep_token: "[SEP]".to_string(),
            pad_token: "[PAD]".to_string(),
        }
    }
}

impl Vocabulary {
    /// Parse a line-oriented vocabulary file (one token per line, line
    /// number is the token id; lines beginning with `##` are continuation
    /// tokens).
    pub fn from_file<P: AsRef<Path>>(path: P, config: LoadConfig) -> Result<Self, Error> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, config)
    }

    pub fn from_reader<R: Read>(reader: R, config: LoadConfig) -> Result<Self, Error> {
        let mut prefix = Trie::default();
        let mut suffix = Trie::default();
        let mut id_to_token = Vec::new();
        let mut seen = HashMap::new();

        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let token = line?;
            let id = u32::try_from(idx).map_err(|_| {
                Error::VocabularyMalformed(format!("vocabulary too large at line {idx}"))
            })?;

            if let Some(prev) = seen.insert(token.to_string(), id) {
                return Err(Error::VocabularyMalformed(format!(
                    "duplicate token {token:?} at lines {prev} and {id}"
                )));
            }

            if let Some(rest) = token.strip_prefix(CONTINUATION_PREFIX) {
                suffix.insert(rest, id);
            } else {
                prefix.insert(&token, id);
            }
            id_to_token.push(token);
        }

        let resolve = |literal: &str| -> Result<(u32, String), Error> {
            seen.get(literal)
                .copied()
                .map(|id| (id, literal.to_string()))
                .ok_or_else(|| Error::VocabularyMalformed(format!("missing special token {literal:?}")))
        };

        let special = SpecialTokens {
            unk: resolve(&config.unk_token)?,
            cls: resolve(&config.cls_token)?,
            sep: resolve(&config.sep_token)?,
            pad: resolve(&config.pad_token)?,
        };

        Ok(Vocabulary {
            prefix: std::sync::Arc::new(prefix),
            suffix: std::sync::Arc::new(suffix),
            id_to_token: std::sync::Arc::new(id_to_token),
            special,
            lowercase_input: config.lowercase_input,
            normalization_form: config.normalization_form,
            max_chars_per_word: config.max_chars_per_word,
        })
    }

    pub(crate) fn longest_prefix(&self, text: &str) -> Option<(usize, u32)> {
        self.prefix.longest_prefix(text)
    }

    pub(crate) fn longest_suffix(&self, text: &str) -> Option<(usize, u32)> {
        self.suffix.longest_prefix(text)
    }

    /// Best-effort literal for `id`, `None` if out of range.
    #[must_use]
    pub fn token_literal(&self, id: u32) -> Option<&str> {
        self.id_to_token.get(id as usize).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id_to_token.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn test_vocab() -> Vocabulary {
    let text = "[PAD]\n[UNK]\n[CLS]\n[SEP]\nhello\nplay\n##ing\na\nb\nc\nd\ne\nf\ng\nh\ni\nj\nk\n";
    Vocabulary::from_reader(text.as_bytes(), LoadConfig::default()).expect("valid test vocab")
}
