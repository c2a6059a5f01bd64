//! # `bertqa` Extractive Question Answering
//!
//! The text side of a BERT question answering model: WordPiece tokenization,
//! fixed-length feature construction, and n-best answer span extraction from
//! the model's start/end logits.
//!
//! The model runtime itself is external; see [`client::InferenceEngine`].
//!
//! See:
//! * [`vocab`] to load wordpiece vocabularies.
//! * [`tokenization`] to split text into wordpieces and ids.
//! * [`features`] to build model inputs from a question and a passage.
//! * [`answers`] to turn model logits into ranked answers.
//! * [`client`] to run the whole pipeline over an inference engine.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``foldhash``
//! * ``rayon``
//!
//! #### feature: ``foldhash``
//!
//! This swaps all HashMap/HashSet implementations for ``foldhash``.
//!
//! This is done by the ``types::QaHash{*}`` type alias machinery.
//!
//! #### feature: ``rayon``
//!
//! This enables parallel batch feature conversion using the ``rayon`` crate.
//!
//! ## Pipeline
//!
//! ```rust
//! use std::sync::Arc;
//! use bertqa::{
//!     answers::AnswerExtractor,
//!     features::FeatureConverterOptions,
//!     vocab::WordpieceVocab,
//! };
//!
//! let vocab: WordpieceVocab<u32> = WordpieceVocab::from_tokens([
//!     "[PAD]", "[UNK]", "[CLS]", "[SEP]", "what", "color", "is", "the", "sky", "?", "blue", ".",
//! ])?;
//!
//! let converter = FeatureConverterOptions::default()
//!     .with_max_seq_len(16)
//!     .with_max_query_len(8)
//!     .build(Arc::new(vocab))?;
//! let feature = converter.convert("What color is the sky?", "The sky is blue.")?;
//!
//! // Stand-in for a model run; "blue" and "." are at positions 11 and 12.
//! let mut start_logits = vec![0.0; 16];
//! let mut end_logits = vec![0.0; 16];
//! start_logits[11] = 4.0;
//! end_logits[12] = 4.0;
//!
//! let answers = AnswerExtractor::default().extract(&start_logits, &end_logits, &feature)?;
//! assert_eq!(answers[0].text, "blue.");
//! # Ok::<(), bertqa::QaError>(())
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod answers;
pub mod client;
pub mod dataset;
pub mod errors;
pub mod features;
pub mod tokenization;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use answers::{Answer, AnswerCandidate, AnswerExtractor, AnswerExtractorOptions};
#[doc(inline)]
pub use client::{InferenceEngine, QaClient, QaClientOptions, TensorLayout};
#[doc(inline)]
pub use errors::{QaError, QaResult};
#[doc(inline)]
pub use features::{Feature, FeatureConverter, FeatureConverterOptions};
#[doc(inline)]
pub use tokenization::FullTokenizer;
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::WordpieceVocab;
