//! Unicode normalization and diacritic stripping.

use crate::unicode::{self, is_non_spacing_mark};

/// Target normalization form for a [`crate::vocab::Vocabulary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Form {
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

impl Default for Form {
    fn default() -> Self {
        Form::Nfd
    }
}

/// Normalize `text` to the given form.
#[must_use]
pub fn normalize(form: Form, text: &str) -> String {
    match form {
        Form::Nfc => unicode::nfc(text),
        Form::Nfd => unicode::nfd(text),
        Form::Nfkc => unicode::nfkc(text),
        Form::Nfkd => unicode::nfkd(text),
    }
}

/// Decompose to NFD, drop non-spacing marks, lowercase any remaining cased
/// letter, and recompose into `target_form`.
///
/// Returns the input unchanged (no further allocation) when NFD-decomposing
/// it would not change it and it has no uppercase letters to fold — a
/// precomposed accented letter (e.g. `'é'`) *does* change under NFD, so this
/// still takes the slow path for it.
#[must_use]
pub fn strip_diacritics(text: &str, target_form: Form) -> String {
    let decomposed = unicode::nfd(text);
    if decomposed == text && !text.chars().any(char::is_uppercase) {
        return text.to_string();
    }

    let stripped: String = decomposed
        .chars()
        .filter(|&c| !is_non_spacing_mark(c))
        .flat_map(char::to_lowercase)
        .collect();

    normalize(target_form, &stripped)
}
