//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for parallel feature conversion.

mod rayon_converter;

pub use rayon_converter::ParallelRayonConverter;
