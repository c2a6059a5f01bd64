use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::TokenType;

/// Fixed-length BERT input for one `(question, context)` pair.
///
/// `input_ids`, `input_mask` and `segment_ids` all have length `max_seq_len`.
/// The token map only has keys for context positions, and every value is a
/// valid index into `original_tokens`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature<T: TokenType> {
    tokens: Vec<String>,
    input_ids: Vec<T>,
    input_mask: Vec<T>,
    segment_ids: Vec<T>,
    original_tokens: Vec<String>,
    token_to_original_map: BTreeMap<usize, usize>,
}

impl<T: TokenType> Feature<T> {
    pub(crate) fn new(
        tokens: Vec<String>,
        input_ids: Vec<T>,
        input_mask: Vec<T>,
        segment_ids: Vec<T>,
        original_tokens: Vec<String>,
        token_to_original_map: BTreeMap<usize, usize>,
    ) -> Self {
        debug_assert_eq!(input_ids.len(), input_mask.len());
        debug_assert_eq!(input_ids.len(), segment_ids.len());
        Self {
            tokens,
            input_ids,
            input_mask,
            segment_ids,
            original_tokens,
            token_to_original_map,
        }
    }

    /// The sequence length of the id, mask and segment arrays.
    pub fn max_seq_len(&self) -> usize {
        self.input_ids.len()
    }

    /// The assembled (unpadded) token strings.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Token ids, zero-padded.
    pub fn input_ids(&self) -> &[T] {
        &self.input_ids
    }

    /// `1` for real tokens, `0` for padding.
    pub fn input_mask(&self) -> &[T] {
        &self.input_mask
    }

    /// `0` for the question segment (and padding), `1` for the context segment.
    pub fn segment_ids(&self) -> &[T] {
        &self.segment_ids
    }

    /// The whitespace-split words of the context.
    pub fn original_tokens(&self) -> &[String] {
        &self.original_tokens
    }

    /// Map from context positions to indices of [`Self::original_tokens`].
    pub fn token_to_original_map(&self) -> &BTreeMap<usize, usize> {
        &self.token_to_original_map
    }

    /// The original word index for an assembled position, if it is a context position.
    pub fn original_index(
        &self,
        position: usize,
    ) -> Option<usize> {
        self.token_to_original_map.get(&position).copied()
    }

    /// Space-join the original words covered by the positions `start..=end`.
    ///
    /// Returns `None` if either position is not a context position.
    pub fn span_text(
        &self,
        start: usize,
        end: usize,
    ) -> Option<String> {
        let lo = self.original_index(start)?;
        let hi = self.original_index(end)?;
        if hi < lo {
            return None;
        }
        Some(self.original_tokens[lo..=hi].join(" "))
    }
}
