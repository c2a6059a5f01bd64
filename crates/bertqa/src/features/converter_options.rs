use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    errors::{QaError, QaResult},
    features::FeatureConverter,
    types::TokenType,
    vocab::WordpieceVocab,
};

/// Positions reserved for `[CLS]` and the two `[SEP]` markers.
pub const RESERVED_MARKER_COUNT: usize = 3;

/// Options for configuring a [`FeatureConverter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureConverterOptions {
    /// Lowercase ASCII letters before tokenizing.
    pub do_lower_case: bool,

    /// Query tokens beyond this count are dropped.
    pub max_query_len: usize,

    /// Length of the id, mask and segment arrays.
    pub max_seq_len: usize,
}

impl Default for FeatureConverterOptions {
    fn default() -> Self {
        Self {
            do_lower_case: true,
            max_query_len: 64,
            max_seq_len: 384,
        }
    }
}

impl FeatureConverterOptions {
    /// Sets the lowercasing flag.
    pub fn with_do_lower_case(
        mut self,
        do_lower_case: bool,
    ) -> Self {
        self.do_lower_case = do_lower_case;
        self
    }

    /// Sets the max query length.
    pub fn with_max_query_len(
        mut self,
        max_query_len: usize,
    ) -> Self {
        self.max_query_len = max_query_len;
        self
    }

    /// Sets the max sequence length.
    pub fn with_max_seq_len(
        mut self,
        max_seq_len: usize,
    ) -> Self {
        self.max_seq_len = max_seq_len;
        self
    }

    /// Check that a full query still leaves room for the markers.
    pub fn validate(&self) -> QaResult<()> {
        if self.max_seq_len < self.max_query_len + RESERVED_MARKER_COUNT {
            return Err(QaError::InvalidOptions(format!(
                "max_seq_len ({}) must be >= max_query_len ({}) + {}",
                self.max_seq_len, self.max_query_len, RESERVED_MARKER_COUNT
            )));
        }
        Ok(())
    }

    /// Build a [`FeatureConverter`] for the given vocab.
    pub fn build<T: TokenType>(
        &self,
        vocab: Arc<WordpieceVocab<T>>,
    ) -> QaResult<FeatureConverter<T>> {
        FeatureConverter::new(vocab, *self)
    }
}
