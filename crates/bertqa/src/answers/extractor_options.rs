use serde::{Deserialize, Serialize};

use crate::{
    answers::AnswerExtractor,
    errors::{QaError, QaResult},
};

/// Options for configuring an [`AnswerExtractor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerExtractorOptions {
    /// Longest allowed span, in positions.
    pub max_answer_len: usize,

    /// Number of best start/end indices considered, and of answers returned.
    pub n_best: usize,

    /// Shift from a logit index to its assembled-sequence position.
    ///
    /// `0` for models whose logits line up with the assembled tokens.
    pub output_offset: usize,
}

impl Default for AnswerExtractorOptions {
    fn default() -> Self {
        Self {
            max_answer_len: 32,
            n_best: 5,
            output_offset: 0,
        }
    }
}

impl AnswerExtractorOptions {
    /// Sets the max answer length.
    pub fn with_max_answer_len(
        mut self,
        max_answer_len: usize,
    ) -> Self {
        self.max_answer_len = max_answer_len;
        self
    }

    /// Sets the n-best count.
    pub fn with_n_best(
        mut self,
        n_best: usize,
    ) -> Self {
        self.n_best = n_best;
        self
    }

    /// Sets the output offset.
    pub fn with_output_offset(
        mut self,
        output_offset: usize,
    ) -> Self {
        self.output_offset = output_offset;
        self
    }

    /// Check the options.
    pub fn validate(&self) -> QaResult<()> {
        if self.n_best == 0 {
            return Err(QaError::InvalidOptions("n_best must be > 0".to_string()));
        }
        if self.max_answer_len == 0 {
            return Err(QaError::InvalidOptions(
                "max_answer_len must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Build an [`AnswerExtractor`].
    pub fn build(&self) -> QaResult<AnswerExtractor> {
        AnswerExtractor::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = AnswerExtractorOptions::default();
        assert_eq!(options.max_answer_len, 32);
        assert_eq!(options.n_best, 5);
        assert_eq!(options.output_offset, 0);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(
            AnswerExtractorOptions::default()
                .with_n_best(0)
                .build()
                .is_err()
        );
        assert!(
            AnswerExtractorOptions::default()
                .with_max_answer_len(0)
                .build()
                .is_err()
        );

        let options = AnswerExtractorOptions::default()
            .with_n_best(2)
            .with_max_answer_len(4)
            .with_output_offset(1);
        assert_eq!(options.build().unwrap().options(), &options);
    }
}
