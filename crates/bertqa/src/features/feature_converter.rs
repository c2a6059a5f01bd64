use std::{collections::BTreeMap, sync::Arc};

use crate::{
    errors::{QaError, QaResult},
    features::{Feature, FeatureConverterOptions, RESERVED_MARKER_COUNT},
    tokenization::FullTokenizer,
    types::TokenType,
    vocab::{
        WordpieceVocab,
        special_tokens::{CLS_TOKEN, REQUIRED_SPECIAL_TOKENS, SEP_TOKEN},
    },
};

/// Builds [`Feature`]s from `(query, context)` pairs.
///
/// Immutable once built; a single converter may be shared across threads.
#[derive(Debug, Clone)]
pub struct FeatureConverter<T: TokenType> {
    tokenizer: FullTokenizer<T>,
    options: FeatureConverterOptions,
}

impl<T: TokenType> FeatureConverter<T> {
    /// Create a new converter.
    ///
    /// ## Arguments
    /// * `vocab` - the wordpiece vocabulary.
    /// * `options` - the converter options.
    ///
    /// ## Returns
    /// An error if the options are inconsistent, or if the vocabulary lacks
    /// `[UNK]`, `[CLS]` or `[SEP]`.
    pub fn new(
        vocab: Arc<WordpieceVocab<T>>,
        options: FeatureConverterOptions,
    ) -> QaResult<Self> {
        options.validate()?;

        for &token in REQUIRED_SPECIAL_TOKENS {
            if !vocab.contains(token) {
                return Err(QaError::MissingSpecialToken {
                    token: token.to_string(),
                });
            }
        }

        Ok(Self {
            tokenizer: FullTokenizer::new(vocab, options.do_lower_case),
            options,
        })
    }

    /// Get the options.
    pub fn options(&self) -> &FeatureConverterOptions {
        &self.options
    }

    /// Get the tokenizer.
    pub fn tokenizer(&self) -> &FullTokenizer<T> {
        &self.tokenizer
    }

    /// Get the sequence length of produced features.
    pub fn max_seq_len(&self) -> usize {
        self.options.max_seq_len
    }

    /// Build the [`Feature`] for a question about a context passage.
    ///
    /// The query is truncated to `max_query_len` tokens, and the context to
    /// whatever fits in `max_seq_len` after the query and the three markers.
    pub fn convert(
        &self,
        query: &str,
        context: &str,
    ) -> QaResult<Feature<T>> {
        let max_seq_len = self.options.max_seq_len;

        let mut query_tokens = self.tokenizer.tokenize(query);
        query_tokens.truncate(self.options.max_query_len);

        let original_tokens: Vec<String> = split_context(context)
            .map(str::to_string)
            .collect();

        let mut doc_tokens: Vec<String> = Vec::new();
        let mut token_to_original_index: Vec<usize> = Vec::new();
        for (idx, word) in original_tokens.iter().enumerate() {
            for piece in self.tokenizer.tokenize(word) {
                token_to_original_index.push(idx);
                doc_tokens.push(piece);
            }
        }

        let max_context_len = max_seq_len - query_tokens.len() - RESERVED_MARKER_COUNT;
        if doc_tokens.len() > max_context_len {
            log::debug!(
                "truncating context from {} to {} tokens",
                doc_tokens.len(),
                max_context_len
            );
            doc_tokens.truncate(max_context_len);
        }

        let real_len = query_tokens.len() + doc_tokens.len() + RESERVED_MARKER_COUNT;
        let mut tokens: Vec<String> = Vec::with_capacity(real_len);
        let mut segment_ids: Vec<T> = Vec::with_capacity(max_seq_len);
        let mut token_to_original_map: BTreeMap<usize, usize> = BTreeMap::new();

        tokens.push(CLS_TOKEN.to_string());
        segment_ids.push(T::zero());

        for token in query_tokens {
            tokens.push(token);
            segment_ids.push(T::zero());
        }

        tokens.push(SEP_TOKEN.to_string());
        segment_ids.push(T::zero());

        for (idx, token) in doc_tokens.into_iter().enumerate() {
            token_to_original_map.insert(tokens.len(), token_to_original_index[idx]);
            tokens.push(token);
            segment_ids.push(T::one());
        }

        tokens.push(SEP_TOKEN.to_string());
        segment_ids.push(T::one());

        let mut input_ids: Vec<T> = Vec::with_capacity(max_seq_len);
        for (token, id) in tokens
            .iter()
            .zip(self.tokenizer.convert_tokens_to_ids(&tokens))
        {
            input_ids.push(id.ok_or_else(|| QaError::UnknownToken {
                token: token.clone(),
            })?);
        }
        let mut input_mask: Vec<T> = vec![T::one(); input_ids.len()];

        input_ids.resize(max_seq_len, T::zero());
        input_mask.resize(max_seq_len, T::zero());
        segment_ids.resize(max_seq_len, T::zero());

        Ok(Feature::new(
            tokens,
            input_ids,
            input_mask,
            segment_ids,
            original_tokens,
            token_to_original_map,
        ))
    }

    /// Convert a batch of `(query, context)` pairs, in order.
    pub fn convert_batch<Q, C>(
        &self,
        batch: &[(Q, C)],
    ) -> QaResult<Vec<Feature<T>>>
    where
        Q: AsRef<str>,
        C: AsRef<str>,
    {
        batch
            .iter()
            .map(|(query, context)| self.convert(query.as_ref(), context.as_ref()))
            .collect()
    }
}

/// Split a context passage into its original words.
///
/// The passage is trimmed of characters `<= ' '` at both ends, then split on
/// runs of ASCII whitespace.
pub fn split_context(context: &str) -> impl Iterator<Item = &str> {
    context
        .trim_matches(|ch: char| ch <= ' ')
        .split(|ch: char| matches!(ch, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r'))
        .filter(|word| !word.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_vocab() -> Arc<WordpieceVocab<u32>> {
        Arc::new(
            WordpieceVocab::from_tokens([
                "[PAD]", "[UNK]", "[CLS]", "[SEP]", "what", "color", "is", "the", "sky", "?",
                "blue", ".", "un", "##aff", "##able",
            ])
            .unwrap(),
        )
    }

    fn test_converter(
        max_query_len: usize,
        max_seq_len: usize,
    ) -> FeatureConverter<u32> {
        FeatureConverterOptions::default()
            .with_max_query_len(max_query_len)
            .with_max_seq_len(max_seq_len)
            .build(test_vocab())
            .unwrap()
    }

    #[test]
    fn test_convert_layout() {
        let converter = test_converter(8, 20);
        fn shared_across_threads<S: Send + Sync>(_: &S) {}
        shared_across_threads(&converter);

        let feature = converter
            .convert("What color is the sky?", "The sky is blue.")
            .unwrap();

        assert_eq!(
            feature.tokens(),
            &[
                "[CLS]", "what", "color", "is", "the", "sky", "?", "[SEP]", "the", "sky", "is",
                "blue", ".", "[SEP]"
            ]
        );
        assert_eq!(feature.original_tokens(), &["The", "sky", "is", "blue."]);

        assert_eq!(feature.max_seq_len(), 20);
        assert_eq!(
            feature.input_ids(),
            &[2, 4, 5, 6, 7, 8, 9, 3, 7, 8, 6, 10, 11, 3, 0, 0, 0, 0, 0, 0]
        );
        assert_eq!(
            feature.input_mask(),
            &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0]
        );
        assert_eq!(
            feature.segment_ids(),
            &[0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0]
        );

        let expected: BTreeMap<usize, usize> =
            [(8, 0), (9, 1), (10, 2), (11, 3), (12, 3)].into_iter().collect();
        assert_eq!(feature.token_to_original_map(), &expected);

        assert_eq!(feature.span_text(11, 12), Some("blue.".to_string()));
        assert_eq!(feature.span_text(8, 12), Some("The sky is blue.".to_string()));
        assert_eq!(feature.span_text(7, 12), None);
        assert_eq!(feature.span_text(12, 8), None);
    }

    #[test]
    fn test_query_truncation() {
        let converter = test_converter(2, 16);
        let feature = converter
            .convert("what color is the sky", "blue")
            .unwrap();

        assert_eq!(
            feature.tokens(),
            &["[CLS]", "what", "color", "[SEP]", "blue", "[SEP]"]
        );
        assert_eq!(feature.original_index(4), Some(0));
    }

    #[test]
    fn test_context_truncation() {
        // 10 - 2 query tokens - 3 markers = 5 context tokens.
        let converter = test_converter(2, 10);
        let feature = converter
            .convert("the sky", "unaffable blue sky is blue")
            .unwrap();

        assert_eq!(
            feature.tokens(),
            &[
                "[CLS]", "the", "sky", "[SEP]", "un", "##aff", "##able", "blue", "sky", "[SEP]"
            ]
        );
        assert_eq!(feature.input_mask().iter().sum::<u32>(), 10);
        assert_eq!(feature.original_tokens().len(), 5);
        assert_eq!(feature.original_index(4), Some(0));
        assert_eq!(feature.original_index(6), Some(0));
        assert_eq!(feature.original_index(8), Some(2));
        assert_eq!(feature.original_index(9), None);
    }

    #[test]
    fn test_empty_inputs() {
        let converter = test_converter(4, 8);
        let feature = converter.convert("", "  ").unwrap();

        assert_eq!(feature.tokens(), &["[CLS]", "[SEP]", "[SEP]"]);
        assert_eq!(feature.input_ids(), &[2, 3, 3, 0, 0, 0, 0, 0]);
        assert!(feature.original_tokens().is_empty());
        assert!(feature.token_to_original_map().is_empty());
    }

    #[test]
    fn test_missing_special_token() {
        let vocab: WordpieceVocab<u32> =
            WordpieceVocab::from_tokens(["[UNK]", "[SEP]", "a"]).unwrap();
        let result = FeatureConverter::new(Arc::new(vocab), FeatureConverterOptions::default());
        assert!(matches!(
            result,
            Err(QaError::MissingSpecialToken { token }) if token == "[CLS]"
        ));
    }

    #[test]
    fn test_invalid_options() {
        let result = FeatureConverterOptions::default()
            .with_max_query_len(10)
            .with_max_seq_len(12)
            .build(test_vocab());
        assert!(matches!(result, Err(QaError::InvalidOptions(_))));
    }

    #[test]
    fn test_convert_batch() {
        let converter = test_converter(4, 12);
        let batch = [("what", "blue sky"), ("sky", "the sky is blue.")];

        let features = converter.convert_batch(&batch).unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0], converter.convert("what", "blue sky").unwrap());
        assert_eq!(
            features[1],
            converter.convert("sky", "the sky is blue.").unwrap()
        );
    }

    #[test]
    fn test_split_context() {
        let words: Vec<&str> = split_context("\u{1} a\tb \n\n c\u{0B}d  ").collect();
        assert_eq!(words, vec!["a", "b", "c", "d"]);
        assert_eq!(split_context("").count(), 0);
        // Unicode spaces are not word breaks.
        assert_eq!(split_context("a\u{00A0}b").count(), 1);
    }

    proptest::proptest! {
        #[test]
        fn feature_arrays_have_max_seq_len(
            query in "[a-z ?]{0,40}",
            context in "[a-zA-Z .,]{0,400}",
            max_query_len in 0usize..8,
            extra in 0usize..40,
        ) {
            let converter = test_converter(max_query_len, max_query_len + 3 + extra);
            let feature = converter.convert(&query, &context).unwrap();
            let max_seq_len = converter.max_seq_len();

            proptest::prop_assert_eq!(feature.input_ids().len(), max_seq_len);
            proptest::prop_assert_eq!(feature.input_mask().len(), max_seq_len);
            proptest::prop_assert_eq!(feature.segment_ids().len(), max_seq_len);
            proptest::prop_assert!(feature.tokens().len() <= max_seq_len);

            for (&position, &original) in feature.token_to_original_map() {
                proptest::prop_assert!(original < feature.original_tokens().len());
                proptest::prop_assert_eq!(feature.segment_ids()[position], 1);
                proptest::prop_assert!(position < feature.tokens().len() - 1);
            }
        }
    }
}
