//! # Answer Extraction
//!
//! Turns the start/end logits of a model run into ranked answer spans.
//!
//! * [`AnswerCandidate`] - a scored `(start, end)` logit index pair.
//! * [`Answer`] - a candidate with its reconstructed context text.
//! * [`AnswerExtractor`] - n-best span selection over a [`crate::features::Feature`].

mod answer_extractor;
mod answer_types;
mod extractor_options;

#[doc(inline)]
pub use answer_extractor::*;
#[doc(inline)]
pub use answer_types::*;
#[doc(inline)]
pub use extractor_options::*;
