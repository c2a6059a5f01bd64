use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A candidate answer span over logit indices.
///
/// `score` is `start_logits[start] + end_logits[end]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnswerCandidate {
    /// Start logit index (inclusive).
    pub start: usize,

    /// End logit index (inclusive).
    pub end: usize,

    /// Combined logit score.
    pub score: f32,
}

impl AnswerCandidate {
    /// Create a new candidate.
    pub fn new(
        start: usize,
        end: usize,
        score: f32,
    ) -> Self {
        Self { start, end, score }
    }

    /// The number of positions covered by the span.
    pub fn span_len(&self) -> usize {
        self.end + 1 - self.start
    }

    /// Descending score order; any NaN sorts before every number.
    pub fn rank_cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        descending_score_cmp(self.score, other.score)
    }
}

/// A ranked answer: the text of the original context words, and its span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// Space-joined original words; empty for the no-answer position.
    pub text: String,

    /// The span and score.
    pub candidate: AnswerCandidate,
}

impl Answer {
    /// Create a new answer.
    pub fn new(
        text: String,
        candidate: AnswerCandidate,
    ) -> Self {
        Self { text, candidate }
    }

    /// Is this the no-answer result?
    pub fn is_no_answer(&self) -> bool {
        self.candidate.start == 0
    }
}

/// Compare scores so that higher scores sort first.
///
/// NaN ranks above every number regardless of its sign bit.
pub(crate) fn descending_score_cmp(
    a: f32,
    b: f32,
) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => b.total_cmp(&a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_span_len() {
        assert_eq!(AnswerCandidate::new(3, 3, 0.0).span_len(), 1);
        assert_eq!(AnswerCandidate::new(3, 7, 0.0).span_len(), 5);
    }

    #[test]
    fn test_rank_cmp() {
        let hi = AnswerCandidate::new(1, 1, 2.0);
        let lo = AnswerCandidate::new(1, 1, -1.0);
        let nan = AnswerCandidate::new(1, 1, f32::NAN);

        assert_eq!(hi.rank_cmp(&lo), Ordering::Less);
        assert_eq!(lo.rank_cmp(&hi), Ordering::Greater);
        assert_eq!(hi.rank_cmp(&hi), Ordering::Equal);
        assert_eq!(nan.rank_cmp(&hi), Ordering::Less);
        assert_eq!(hi.rank_cmp(&nan), Ordering::Greater);
    }

    #[test]
    fn test_negative_nan_ranks_first() {
        let neg_nan = -f32::NAN;
        assert!(neg_nan.is_nan());
        assert!(neg_nan.is_sign_negative());

        assert_eq!(descending_score_cmp(neg_nan, f32::INFINITY), Ordering::Less);
        assert_eq!(descending_score_cmp(f32::MIN, neg_nan), Ordering::Greater);
        assert_eq!(descending_score_cmp(neg_nan, f32::NAN), Ordering::Equal);

        let mut scores = vec![1.0, neg_nan, -3.0, f32::NAN, 2.0];
        scores.sort_by(|&a, &b| descending_score_cmp(a, b));
        assert!(scores[0].is_sign_negative() && scores[0].is_nan());
        assert!(scores[1].is_sign_positive() && scores[1].is_nan());
        assert_eq!(scores[2..], [2.0, 1.0, -3.0]);
    }

    #[test]
    fn test_no_answer() {
        let answer = Answer::new(String::new(), AnswerCandidate::new(0, 0, 1.0));
        assert!(answer.is_no_answer());

        let answer = Answer::new("blue".to_string(), AnswerCandidate::new(4, 4, 1.0));
        assert!(!answer.is_no_answer());
    }
}
