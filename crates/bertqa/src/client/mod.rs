//! # Question Answering Client
//!
//! Wires a [`FeatureConverter`](crate::features::FeatureConverter) and an
//! [`AnswerExtractor`](crate::answers::AnswerExtractor) around an external
//! model runtime.
//!
//! The runtime is abstracted by [`InferenceEngine`]; models may name their
//! tensors, and [`TensorLayout`] resolves those names to an input order and
//! output indices.

mod inference;
mod qa_client;
mod tensor_layout;

#[doc(inline)]
pub use inference::*;
#[doc(inline)]
pub use qa_client::*;
#[doc(inline)]
pub use tensor_layout::*;
