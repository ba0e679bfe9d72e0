//! Framing, truncation, padding and batch dispatch.

use rayon::prelude::*;

use crate::pretokenize::{pretokenize, Flow};
use crate::vocab::Vocabulary;
use crate::wordpiece::{match_word, MAX_WORD_PIECES};
use crate::Error;

/// Owned result of [`tokenize_to_vec`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Encoding {
    pub input_ids: Vec<u32>,
    pub attention_mask: Vec<u32>,
    pub token_type_ids: Vec<u32>,
}

/// Sink-based encode. Writes at most `input_ids.len()` ids, framing with
/// `[CLS]`/`[SEP]` and padding to `pad_to` if given. Words are emitted
/// all-or-nothing: if a word's full decomposition would not fit in the
/// remaining capacity, encoding stops before that word.
///
/// `attention_mask` and `token_type_ids`, if provided, must be the same
/// length as `input_ids`.
pub fn tokenize(
    vocab: &Vocabulary,
    input: &str,
    input_ids: &mut [u32],
    attention_mask: Option<&mut [u32]>,
    token_type_ids: Option<&mut [u32]>,
    pad_to: Option<usize>,
) -> Result<usize, Error> {
    let capacity = input_ids.len();
    if capacity < 2 {
        return Err(Error::SinkTooSmall { capacity });
    }

    input_ids[0] = vocab.special.cls.0;
    let mut pos = 1usize;

    pretokenize(input, vocab.lowercase_input, |word| {
        let mut scratch = [0u32; MAX_WORD_PIECES];
        let k = match_word(vocab, word, &mut scratch);
        if pos + k + 1 > capacity {
            return Flow::Stop;
        }
        input_ids[pos..pos + k].copy_from_slice(&scratch[..k]);
        pos += k;
        Flow::Continue
    });

    input_ids[pos] = vocab.special.sep.0;
    pos += 1;
    let produced = pos;

    let total = match pad_to {
        Some(pad_to) if pad_to > produced => {
            let fill_to = pad_to.min(capacity);
            for slot in input_ids.iter_mut().take(fill_to).skip(produced) {
                *slot = vocab.special.pad.0;
            }
            fill_to
        }
        _ => produced,
    };

    if let Some(mask) = attention_mask {
        for (i, slot) in mask.iter_mut().take(total).enumerate() {
            *slot = u32::from(i < produced);
        }
    }
    if let Some(types) = token_type_ids {
        for slot in types.iter_mut().take(total) {
            *slot = 0;
        }
    }

    Ok(total)
}

/// Allocating convenience wrapper around [`tokenize`].
pub fn tokenize_to_vec(
    vocab: &Vocabulary,
    input: &str,
    maximum_tokens: usize,
    pad_to: Option<usize>,
) -> Result<Encoding, Error> {
    let mut input_ids = vec![0u32; maximum_tokens];
    let mut attention_mask = vec![0u32; maximum_tokens];
    let mut token_type_ids = vec![0u32; maximum_tokens];

    let len = tokenize(
        vocab,
        input,
        &mut input_ids,
        Some(&mut attention_mask),
        Some(&mut token_type_ids),
        pad_to,
    )?;

    input_ids.truncate(len);
    attention_mask.truncate(len);
    token_type_ids.truncate(len);

    Ok(Encoding {
        input_ids,
        attention_mask,
        token_type_ids,
    })
}

/// Encode `inputs` in parallel, one row per input, writing into disjoint
/// slices of the caller's flat sinks (`batch * maximum_tokens` each).
pub fn tokenize_batch(
    vocab: &Vocabulary,
    inputs: &[&str],
    input_ids: &mut [u32],
    attention_mask: &mut [u32],
    token_type_ids: &mut [u32],
    maximum_tokens: usize,
    pad_to: Option<usize>,
) -> Result<Vec<usize>, Error> {
    let batch = inputs.len();
    let expected = batch * maximum_tokens;
    if input_ids.len() != expected || attention_mask.len() != expected || token_type_ids.len() != expected {
        return Err(Error::SinkTooSmall {
            capacity: input_ids.len(),
        });
    }

    let ids_rows = input_ids.par_chunks_mut(maximum_tokens);
    let mask_rows = attention_mask.par_chunks_mut(maximum_tokens);
    let type_rows = token_type_ids.par_chunks_mut(maximum_tokens);

    inputs
        .par_iter()
        .zip(ids_rows)
        .zip(mask_rows)
        .zip(type_rows)
        .map(|(((input, ids_row), mask_row), type_row)| {
            tokenize(vocab, input, ids_row, Some(mask_row), Some(type_row), pad_to)
        })
        .collect()
}

/// Best-effort inverse of encoding: joins token literals, dropping the `##`
/// continuation marker at each subword boundary. Ids outside the
/// vocabulary's range are skipped rather than causing a panic.
#[must_use]
pub fn decode(vocab: &Vocabulary, ids: &[u32], skip_special_tokens: bool) -> String {
    let special_ids = [
        vocab.special.cls.0,
        vocab.special.sep.0,
        vocab.special.pad.0,
        vocab.special.unk.0,
    ];

    let mut out = String::new();
    for &id in ids {
        if skip_special_tokens && special_ids.contains(&id) {
            continue;
        }
        let Some(literal) = vocab.token_literal(id) else {
            continue;
        };
        if let Some(continuation) = literal.strip_prefix("##") {
            out.push_str(continuation);
        } else {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(literal);
        }
    }
    out
}
