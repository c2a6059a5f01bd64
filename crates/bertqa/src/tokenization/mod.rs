//! # Tokenization
//!
//! The BERT tokenization pipeline:
//! * [`char_classes`] - per-character predicates.
//! * [`BasicTokenizer`] - cleanup, lowercasing and punctuation splitting.
//! * [`WordpieceTokenizer`] - greedy longest-match-first subword splitting.
//! * [`FullTokenizer`] - both stages, plus vocabulary id conversion.
//!
//! ```rust
//! use std::sync::Arc;
//! use bertqa::{tokenization::FullTokenizer, vocab::WordpieceVocab};
//!
//! let vocab: WordpieceVocab<u32> =
//!     WordpieceVocab::from_tokens(["[UNK]", "hello", ",", "world", "!"]).unwrap();
//! let tokenizer = FullTokenizer::new(Arc::new(vocab), true);
//!
//! let tokens = tokenizer.tokenize("Hello, World!");
//! assert_eq!(tokens, vec!["hello", ",", "world", "!"]);
//! assert_eq!(
//!     tokenizer.convert_tokens_to_ids(&tokens),
//!     vec![Some(1), Some(2), Some(3), Some(4)],
//! );
//! ```

pub mod basic_tokenizer;
pub mod char_classes;
pub mod full_tokenizer;
pub mod wordpiece_tokenizer;

#[doc(inline)]
pub use basic_tokenizer::BasicTokenizer;
#[doc(inline)]
pub use full_tokenizer::FullTokenizer;
#[doc(inline)]
pub use wordpiece_tokenizer::WordpieceTokenizer;
