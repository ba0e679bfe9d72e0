//! # wordpiece-rs
//!
//! WordPiece tokenization for BERT-family models.
//!
//! Loads a vocabulary, then normalizes, pre-tokenizes and subword-matches
//! input text into the `input_ids` / `attention_mask` / `token_type_ids`
//! triple a BERT encoder expects.
//!
//! ```
//! use wordpiece_rs::Builder;
//!
//! let vocab = "[PAD]\n[UNK]\n[CLS]\n[SEP]\nhello\nworld\n";
//! let tokenizer = Builder::new().build_from_reader(vocab.as_bytes()).unwrap();
//! let encoding = tokenizer.encode("hello world", 10, None).unwrap();
//! assert_eq!(encoding.input_ids.len(), 4); // [CLS] hello world [SEP]
//! ```

pub mod builder;
pub mod encoder;
pub mod normalize;
pub mod pretokenize;
pub mod unicode;
pub mod vocab;
pub mod wordpiece;

pub use builder::Builder;
pub use encoder::Encoding;
pub use normalize::Form;
pub use vocab::Vocabulary;

use std::io::Read;
use std::path::Path;

/// Errors surfaced by vocabulary loading and encoding.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("vocabulary not loaded")]
    VocabularyNotLoaded,
    #[error("vocabulary malformed: {0}")]
    VocabularyMalformed(String),
    #[error("encode sink too small: needs at least 2 slots, got {capacity}")]
    SinkTooSmall { capacity: usize },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load-state-aware façade over [`Vocabulary`] and the encoder/decoder free
/// functions. Constructing one with no vocabulary loaded is a valid, useful
/// state: every encode/decode call on it returns
/// [`Error::VocabularyNotLoaded`] instead of panicking.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    vocab: Option<Vocabulary>,
}

impl Tokenizer {
    /// A tokenizer with no vocabulary loaded.
    #[must_use]
    pub fn empty() -> Self {
        Self { vocab: None }
    }

    #[must_use]
    pub(crate) fn from_vocabulary(vocab: Vocabulary) -> Self {
        Self { vocab: Some(vocab) }
    }

    /// Load (or replace) the vocabulary from a file path.
    pub fn load_vocab_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        let vocab = Vocabulary::from_file(path, vocab::LoadConfig::default())?;
        self.vocab = Some(vocab);
        Ok(())
    }

    /// Load (or replace) the vocabulary from an arbitrary reader.
    pub fn load_vocab_reader<R: Read>(&mut self, reader: R) -> Result<(), Error> {
        let vocab = Vocabulary::from_reader(reader, vocab::LoadConfig::default())?;
        self.vocab = Some(vocab);
        Ok(())
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.vocab.is_some()
    }

    #[must_use]
    pub fn vocabulary(&self) -> Option<&Vocabulary> {
        self.vocab.as_ref()
    }

    fn vocab(&self) -> Result<&Vocabulary, Error> {
        self.vocab.as_ref().ok_or(Error::VocabularyNotLoaded)
    }

    /// Sink-based encode; see [`encoder::tokenize`].
    pub fn encode_into(
        &self,
        input: &str,
        input_ids: &mut [u32],
        attention_mask: Option<&mut [u32]>,
        token_type_ids: Option<&mut [u32]>,
        pad_to: Option<usize>,
    ) -> Result<usize, Error> {
        encoder::tokenize(self.vocab()?, input, input_ids, attention_mask, token_type_ids, pad_to)
    }

    /// Allocating convenience encode; see [`encoder::tokenize_to_vec`].
    pub fn encode(&self, input: &str, maximum_tokens: usize, pad_to: Option<usize>) -> Result<Encoding, Error> {
        encoder::tokenize_to_vec(self.vocab()?, input, maximum_tokens, pad_to)
    }

    /// Batch encode across a worker pool; see [`encoder::tokenize_batch`].
    pub fn encode_batch(
        &self,
        inputs: &[&str],
        input_ids: &mut [u32],
        attention_mask: &mut [u32],
        token_type_ids: &mut [u32],
        maximum_tokens: usize,
        pad_to: Option<usize>,
    ) -> Result<Vec<usize>, Error> {
        encoder::tokenize_batch(
            self.vocab()?,
            inputs,
            input_ids,
            attention_mask,
            token_type_ids,
            maximum_tokens,
            pad_to,
        )
    }

    /// Best-effort inverse of encoding; see [`encoder::decode`].
    pub fn decode(&self, ids: &[u32], skip_special_tokens: bool) -> Result<String, Error> {
        Ok(encoder::decode(self.vocab()?, ids, skip_special_tokens))
    }
}
