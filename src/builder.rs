//! Fluent configuration for constructing a [`crate::Tokenizer`].

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::normalize::Form;
use crate::vocab::{LoadConfig, Vocabulary};
use crate::{Error, Tokenizer};

/// Accumulates configuration, then parses the vocabulary and assembles a
/// [`Tokenizer`] on [`Builder::build`].
pub struct Builder {
    vocab_path: Option<PathBuf>,
    config: LoadConfig,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            vocab_path: None,
            config: LoadConfig::default(),
        }
    }
}

impl Builder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Vocabulary file to load on [`Builder::build`].
    #[must_use]
    pub fn with_vocab_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.vocab_path = Some(path.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn with_normalizer(mut self, lowercase: bool, normalization_form: Form) -> Self {
        self.config.lowercase_input = lowercase;
        self.config.normalization_form = normalization_form;
        self
    }

    #[must_use]
    pub fn with_model(mut self, unk_token: impl Into<String>, max_chars_per_word: usize) -> Self {
        self.config.unk_token = unk_token.into();
        self.config.max_chars_per_word = max_chars_per_word;
        self
    }

    #[must_use]
    pub fn with_special_tokens(
        mut self,
        cls: impl Into<String>,
        sep: impl Into<String>,
        pad: impl Into<String>,
    ) -> Self {
        self.config.cls_token = cls.into();
        self.config.sep_token = sep.into();
        self.config.pad_token = pad.into();
        self
    }

    /// Parse the configured vocabulary file and assemble a loaded
    /// [`Tokenizer`]. Fails with [`Error::VocabularyMalformed`] if a special
    /// token is missing or the file contains a duplicate entry.
    pub fn build(self) -> Result<Tokenizer, Error> {
        let path = self
            .vocab_path
            .ok_or_else(|| Error::VocabularyMalformed("no vocabulary file configured".to_string()))?;
        let vocab = Vocabulary::from_file(path, self.config)?;
        Ok(Tokenizer::from_vocabulary(vocab))
    }

    /// Like [`Builder::build`], but reads the vocabulary from an arbitrary
    /// reader instead of a file path (useful for embedded/test vocabularies).
    pub fn build_from_reader<R: Read>(self, reader: R) -> Result<Tokenizer, Error> {
        let vocab = Vocabulary::from_reader(reader, self.config)?;
        Ok(Tokenizer::from_vocabulary(vocab))
    }
}
