use crate::{
    answers::{Answer, AnswerCandidate, AnswerExtractorOptions, answer_types::descending_score_cmp},
    errors::{QaError, QaResult},
    features::Feature,
    types::TokenType,
};

/// Selects the n-best answer spans from model logits.
///
/// Stateless apart from its options; extraction never mutates the feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerExtractor {
    options: AnswerExtractorOptions,
}

impl Default for AnswerExtractor {
    fn default() -> Self {
        Self {
            options: AnswerExtractorOptions::default(),
        }
    }
}

impl AnswerExtractor {
    /// Create a new extractor.
    pub fn new(options: AnswerExtractorOptions) -> QaResult<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Get the options.
    pub fn options(&self) -> &AnswerExtractorOptions {
        &self.options
    }

    /// The indices of the `n_best` largest logits, best first.
    ///
    /// Equal logits keep index order.
    pub fn best_indexes(
        &self,
        logits: &[f32],
    ) -> Vec<usize> {
        let mut indexes: Vec<usize> = (0..logits.len()).collect();
        indexes.sort_by(|&a, &b| descending_score_cmp(logits[a], logits[b]));
        indexes.truncate(self.options.n_best);
        indexes
    }

    /// All valid spans over the best start and end indices, best first.
    ///
    /// A span is valid when both shifted ends are context positions of the
    /// feature, `end >= start`, and it is at most `max_answer_len` long.
    /// Equal scores keep start-major, end-minor discovery order.
    pub fn candidates<T: TokenType>(
        &self,
        start_logits: &[f32],
        end_logits: &[f32],
        feature: &Feature<T>,
    ) -> Vec<AnswerCandidate> {
        let offset = self.options.output_offset;
        let map = feature.token_to_original_map();

        let start_indexes = self.best_indexes(start_logits);
        let end_indexes = self.best_indexes(end_logits);

        let mut candidates = Vec::new();
        for &start in &start_indexes {
            for &end in &end_indexes {
                if !map.contains_key(&(start + offset)) || !map.contains_key(&(end + offset)) {
                    continue;
                }
                if end < start {
                    continue;
                }
                if end - start + 1 > self.options.max_answer_len {
                    continue;
                }
                candidates.push(AnswerCandidate::new(
                    start,
                    end,
                    start_logits[start] + end_logits[end],
                ));
            }
        }

        candidates.sort_by(AnswerCandidate::rank_cmp);
        candidates
    }

    /// Extract up to `n_best` ranked answers.
    ///
    /// ## Arguments
    /// * `start_logits` - per-position start logits, `feature.max_seq_len()` long.
    /// * `end_logits` - per-position end logits, `feature.max_seq_len()` long.
    /// * `feature` - the feature the logits were computed for.
    ///
    /// ## Returns
    /// The answers, best first. An empty list means no answer was found.
    /// Errors only if the logit lengths don't match the feature.
    pub fn extract<T: TokenType>(
        &self,
        start_logits: &[f32],
        end_logits: &[f32],
        feature: &Feature<T>,
    ) -> QaResult<Vec<Answer>> {
        let expected = feature.max_seq_len();
        if start_logits.len() != expected || end_logits.len() != expected {
            return Err(QaError::LogitsShape {
                expected,
                start: start_logits.len(),
                end: end_logits.len(),
            });
        }

        let offset = self.options.output_offset;
        let answers = self
            .candidates(start_logits, end_logits, feature)
            .into_iter()
            .take(self.options.n_best)
            .map(|candidate| {
                let text = if candidate.start > 0 {
                    feature
                        .span_text(candidate.start + offset, candidate.end + offset)
                        .unwrap_or_default()
                } else {
                    String::new()
                };
                Answer::new(text, candidate)
            })
            .collect();

        Ok(answers)
    }
}
