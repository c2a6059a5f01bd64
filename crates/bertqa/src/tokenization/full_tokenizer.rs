//! # Full Tokenizer
//!
//! [`BasicTokenizer`] followed by [`WordpieceTokenizer`], plus id conversion.

use std::sync::Arc;

use crate::{
    tokenization::{BasicTokenizer, WordpieceTokenizer},
    types::TokenType,
    vocab::WordpieceVocab,
};

/// End-to-end BERT text tokenizer.
#[derive(Debug, Clone)]
pub struct FullTokenizer<T: TokenType> {
    basic: BasicTokenizer,
    wordpiece: WordpieceTokenizer<T>,
}

impl<T: TokenType> FullTokenizer<T> {
    /// Create a new full tokenizer.
    ///
    /// ## Arguments
    /// * `vocab` - the shared wordpiece vocabulary.
    /// * `do_lower_case` - lowercase ASCII letters before splitting.
    pub fn new(
        vocab: Arc<WordpieceVocab<T>>,
        do_lower_case: bool,
    ) -> Self {
        Self {
            basic: BasicTokenizer::new(do_lower_case),
            wordpiece: WordpieceTokenizer::new(vocab),
        }
    }

    /// Get the vocabulary.
    pub fn vocab(&self) -> &Arc<WordpieceVocab<T>> {
        self.wordpiece.vocab()
    }

    /// Get the basic tokenizer stage.
    pub fn basic_tokenizer(&self) -> &BasicTokenizer {
        &self.basic
    }

    /// Get the wordpiece tokenizer stage.
    pub fn wordpiece_tokenizer(&self) -> &WordpieceTokenizer<T> {
        &self.wordpiece
    }

    /// Tokenize `text` into wordpieces.
    pub fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        let mut output = Vec::new();
        for token in self.basic.tokenize(text) {
            self.wordpiece.tokenize_word_append(&token, &mut output);
        }
        output
    }

    /// Map tokens to their vocabulary ids.
    ///
    /// Tokens missing from the vocabulary map to `None`.
    pub fn convert_tokens_to_ids<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Vec<Option<T>> {
        let vocab = self.vocab();
        tokens
            .iter()
            .map(|token| vocab.lookup_token(token.as_ref()))
            .collect()
    }
}
