//! # Basic Tokenizer
//!
//! Text cleanup, optional lowercasing, and punctuation splitting.

use serde::{Deserialize, Serialize};

use crate::tokenization::char_classes::{is_control, is_invalid, is_punctuation, is_whitespace};

/// Splits raw text into coarse word and punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BasicTokenizer {
    do_lower_case: bool,
}

impl BasicTokenizer {
    /// Create a new basic tokenizer.
    ///
    /// ## Arguments
    /// * `do_lower_case` - lowercase ASCII letters before splitting.
    pub fn new(do_lower_case: bool) -> Self {
        Self { do_lower_case }
    }

    /// Does this tokenizer lowercase its input?
    pub fn do_lower_case(&self) -> bool {
        self.do_lower_case
    }

    /// Tokenize `text` into a flat sequence of non-empty tokens.
    ///
    /// ```rust
    /// use bertqa::tokenization::BasicTokenizer;
    ///
    /// let tokens = BasicTokenizer::new(true).tokenize("Hello, world!");
    /// assert_eq!(tokens, vec!["hello", ",", "world", "!"]);
    /// ```
    pub fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        let cleaned = clean_text(text);

        let mut joined = String::with_capacity(cleaned.len() * 2);
        for token in whitespace_tokenize(&cleaned) {
            let token = if self.do_lower_case {
                token.to_ascii_lowercase()
            } else {
                token.to_string()
            };

            for piece in split_on_punctuation(&token) {
                joined.push_str(&piece);
                joined.push(' ');
            }
        }

        whitespace_tokenize(&joined)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Drop invalid and control characters, and map all whitespace to `' '`.
pub fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|&ch| !(is_invalid(ch) || is_control(ch)))
        .map(|ch| if is_whitespace(ch) { ' ' } else { ch })
        .collect()
}

/// Split on single ASCII spaces.
///
/// Consecutive spaces yield empty tokens.
pub fn whitespace_tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ')
}

/// Split `text` so that each punctuation character is its own token.
///
/// ```rust
/// use bertqa::tokenization::basic_tokenizer::split_on_punctuation;
///
/// assert_eq!(split_on_punctuation("don't!"), vec!["don", "'", "t", "!"]);
/// ```
pub fn split_on_punctuation(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut start_new_word = true;

    for ch in text.chars() {
        if is_punctuation(ch) {
            tokens.push(ch.to_string());
            start_new_word = true;
        } else {
            if start_new_word {
                tokens.push(String::new());
                start_new_word = false;
            }
            if let Some(last) = tokens.last_mut() {
                last.push(ch);
            }
        }
    }

    tokens
}
