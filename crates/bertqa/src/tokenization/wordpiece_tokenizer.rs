//! # Wordpiece Tokenizer
//!
//! Greedy longest-match-first subword splitting.

use std::sync::Arc;

use crate::{
    tokenization::basic_tokenizer::whitespace_tokenize,
    types::TokenType,
    vocab::{
        WordpieceVocab,
        special_tokens::{CONTINUATION_PREFIX, UNK_TOKEN},
    },
};

/// Words longer than this many characters become [`UNK_TOKEN`].
pub const MAX_INPUT_CHARS_PER_WORD: usize = 200;

/// Splits words into the wordpieces of a vocabulary.
#[derive(Debug, Clone)]
pub struct WordpieceTokenizer<T: TokenType> {
    vocab: Arc<WordpieceVocab<T>>,
}

impl<T: TokenType> WordpieceTokenizer<T> {
    /// Create a new wordpiece tokenizer.
    pub fn new(vocab: Arc<WordpieceVocab<T>>) -> Self {
        Self { vocab }
    }

    /// Get the vocabulary.
    pub fn vocab(&self) -> &Arc<WordpieceVocab<T>> {
        &self.vocab
    }

    /// Tokenize each space-separated word of `text` into wordpieces.
    ///
    /// `text` should already have been through a
    /// [`BasicTokenizer`](crate::tokenization::BasicTokenizer).
    ///
    /// A word with no complete split into vocabulary pieces becomes a single
    /// [`UNK_TOKEN`]; partial splits are discarded.
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use bertqa::{tokenization::WordpieceTokenizer, vocab::WordpieceVocab};
    ///
    /// let vocab: WordpieceVocab<u32> =
    ///     WordpieceVocab::from_tokens(["[UNK]", "un", "##aff", "##able"]).unwrap();
    /// let tokenizer = WordpieceTokenizer::new(Arc::new(vocab));
    ///
    /// assert_eq!(tokenizer.tokenize("unaffable"), vec!["un", "##aff", "##able"]);
    /// assert_eq!(tokenizer.tokenize("xyz"), vec!["[UNK]"]);
    /// ```
    pub fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        let mut output = Vec::new();
        for word in whitespace_tokenize(text) {
            self.tokenize_word_append(word, &mut output);
        }
        output
    }

    /// Append the wordpieces of a single word to `output`.
    pub fn tokenize_word_append(
        &self,
        word: &str,
        output: &mut Vec<String>,
    ) {
        // Byte offsets of every char boundary, including the end.
        let bounds: Vec<usize> = word
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(Some(word.len()))
            .collect();
        let char_len = bounds.len() - 1;

        if char_len > MAX_INPUT_CHARS_PER_WORD {
            output.push(UNK_TOKEN.to_string());
            return;
        }

        let mut pieces: Vec<String> = Vec::new();
        let mut candidate = String::with_capacity(word.len() + CONTINUATION_PREFIX.len());
        let mut start = 0;
        while start < char_len {
            let mut end = char_len;
            let mut found = false;

            while start < end {
                candidate.clear();
                if start > 0 {
                    candidate.push_str(CONTINUATION_PREFIX);
                }
                candidate.push_str(&word[bounds[start]..bounds[end]]);

                if self.vocab.contains(&candidate) {
                    found = true;
                    break;
                }
                end -= 1;
            }

            if !found {
                output.push(UNK_TOKEN.to_string());
                return;
            }

            pieces.push(candidate.clone());
            start = end;
        }

        output.extend(pieces);
    }
}
