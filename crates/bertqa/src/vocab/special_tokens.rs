//! # Special Tokens
//!
//! Reserved marker literals of BERT-style vocabularies.

/// Emitted for words that cannot be split into known wordpieces.
pub const UNK_TOKEN: &str = "[UNK]";

/// Leading classification marker; always position 0 of a feature.
pub const CLS_TOKEN: &str = "[CLS]";

/// Segment separator marker.
pub const SEP_TOKEN: &str = "[SEP]";

/// Prefix marking a wordpiece that continues the previous piece.
pub const CONTINUATION_PREFIX: &str = "##";

/// The markers a [`crate::features::FeatureConverter`] needs ids for.
pub const REQUIRED_SPECIAL_TOKENS: &[&str] = &[UNK_TOKEN, CLS_TOKEN, SEP_TOKEN];
