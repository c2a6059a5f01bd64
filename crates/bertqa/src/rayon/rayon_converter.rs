//! # Parallel Converter

use crate::{
    errors::QaResult,
    features::{Feature, FeatureConverter},
    types::TokenType,
};

/// Batch-Level Parallel Converter Wrapper.
///
/// Enables ``rayon`` conversion of batches; conversions share no mutable state.
#[derive(Debug, Clone)]
pub struct ParallelRayonConverter<T: TokenType> {
    /// Inner converter.
    pub inner: FeatureConverter<T>,
}

impl<T: TokenType> ParallelRayonConverter<T> {
    /// Create a new parallel converter.
    ///
    /// ## Arguments
    /// * `inner` - The feature converter to wrap.
    pub fn new(inner: FeatureConverter<T>) -> Self {
        Self { inner }
    }

    /// Convert a single `(query, context)` pair.
    pub fn convert(
        &self,
        query: &str,
        context: &str,
    ) -> QaResult<Feature<T>> {
        self.inner.convert(query, context)
    }

    /// Convert a batch of `(query, context)` pairs in parallel.
    ///
    /// Results are in input order. If any pair fails, one of the failures is
    /// returned; which one is unspecified when several fail.
    pub fn convert_batch<Q, C>(
        &self,
        batch: &[(Q, C)],
    ) -> QaResult<Vec<Feature<T>>>
    where
        Q: AsRef<str> + Sync,
        C: AsRef<str> + Sync,
    {
        use rayon::prelude::*;
        batch
            .par_iter()
            .map(|(query, context)| self.inner.convert(query.as_ref(), context.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{features::FeatureConverterOptions, vocab::WordpieceVocab};

    fn test_converter() -> FeatureConverter<u32> {
        let vocab = WordpieceVocab::from_tokens([
            "[PAD]", "[UNK]", "[CLS]", "[SEP]", "the", "sky", "is", "blue", ".",
        ])
        .unwrap();
        FeatureConverterOptions::default()
            .with_max_query_len(4)
            .with_max_seq_len(24)
            .build(Arc::new(vocab))
            .unwrap()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let converter = test_converter();
        let parallel = ParallelRayonConverter::new(converter.clone());

        let batch: Vec<(String, String)> = (0..32)
            .map(|i| {
                (
                    format!("the sky {i}"),
                    "the sky is blue . ".repeat(i % 5),
                )
            })
            .collect();

        let expected = converter.convert_batch(&batch).unwrap();
        let actual = parallel.convert_batch(&batch).unwrap();
        assert_eq!(actual, expected);

        assert_eq!(
            parallel.convert("sky", "blue").unwrap(),
            converter.convert("sky", "blue").unwrap()
        );
    }

    #[test]
    fn test_parallel_empty_batch() {
        let parallel = ParallelRayonConverter::new(test_converter());
        let batch: [(&str, &str); 0] = [];
        assert!(parallel.convert_batch(&batch).unwrap().is_empty());
    }
}
