//! # Vocabulary
//!
//! A wordpiece vocabulary maps token strings to integer ids.
//!
//! * [`WordpieceVocab`] - the read-only ``{ String -> T }`` map.
//! * [`special_tokens`] - the reserved marker literals.
//! * [`io`] - the one-token-per-line vocabulary file format.
//!
//! Vocabularies are loaded once and shared through an `Arc`; nothing
//! mutates them after construction.

pub mod io;
pub mod special_tokens;
pub mod wordpiece_vocab;

#[doc(inline)]
pub use wordpiece_vocab::WordpieceVocab;
