//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a vocabulary id.
///
/// These are constrained to be unsigned primitive integers;
/// such that the max id in a vocabulary is less than `T::max()`.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type QaHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> QaHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }
    } else {
        /// Type Alias for hash maps in this crate.
        pub type QaHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> QaHashMap<K, V> {
            QaHashMap::with_capacity(capacity)
        }
    }
}
