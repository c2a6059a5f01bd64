//! # Wordpiece Vocabulary

use crate::{
    errors::QaResult,
    types::{QaHashMap, TokenType, hash_map_with_capacity},
};

/// Read-only ``{ String -> T }`` wordpiece vocabulary.
///
/// Only point lookups are meaningful; iteration order is unspecified.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct WordpieceVocab<T: TokenType> {
    token_map: QaHashMap<String, T>,
}

impl<T: TokenType> From<QaHashMap<String, T>> for WordpieceVocab<T> {
    fn from(token_map: QaHashMap<String, T>) -> Self {
        Self::from_map(token_map)
    }
}

impl<T: TokenType> WordpieceVocab<T> {
    /// Create a new vocab from a token map.
    pub fn from_map(token_map: QaHashMap<String, T>) -> Self {
        Self { token_map }
    }

    /// Create a new vocab where each token's id is its position in `tokens`.
    ///
    /// A repeated token keeps the id of its last occurrence.
    ///
    /// ## Arguments
    /// * `tokens` - the tokens, in id order.
    ///
    /// ## Returns
    /// The vocab, or [`crate::QaError::TokenOutOfRange`] if an id doesn't fit in `T`.
    pub fn from_tokens<I, S>(tokens: I) -> QaResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = tokens.into_iter();
        let mut token_map = hash_map_with_capacity(tokens.size_hint().0);

        for (idx, token) in tokens.enumerate() {
            let id = T::from_usize(idx).ok_or(crate::QaError::TokenOutOfRange)?;
            if let Some(prev) = token_map.insert(token.into(), id) {
                log::warn!("duplicate vocab entry: id {prev} replaced by id {id}");
            }
        }

        Ok(Self { token_map })
    }

    /// Get the token map.
    pub fn token_map(&self) -> &QaHashMap<String, T> {
        &self.token_map
    }

    /// Get the number of tokens in the vocab.
    pub fn len(&self) -> usize {
        self.token_map.len()
    }

    /// Check if the vocab is empty.
    pub fn is_empty(&self) -> bool {
        self.token_map.is_empty()
    }

    /// Return the id for the token, if any.
    pub fn lookup_token(
        &self,
        token: &str,
    ) -> Option<T> {
        self.token_map.get(token).copied()
    }

    /// Check if the token is in the vocab.
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.token_map.contains_key(token)
    }

    /// The largest id in the vocab.
    pub fn max_token(&self) -> Option<T> {
        self.token_map.values().copied().max()
    }

    /// List the `(token, id)` pairs, sorted by id.
    pub fn to_token_list(&self) -> Vec<(&str, T)> {
        let mut items: Vec<(&str, T)> = self
            .token_map
            .iter()
            .map(|(token, &id)| (token.as_str(), id))
            .collect();
        items.sort_by_key(|&(_, id)| id);
        items
    }
}
