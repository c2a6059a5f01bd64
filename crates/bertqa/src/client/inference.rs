use crate::{errors::QaResult, types::TokenType};

/// A model runtime that maps BERT input tensors to logit tensors.
///
/// Each input is a `[1, max_seq_len]` integer tensor, passed flat. The engine
/// returns its output tensors flat, in its own output order.
pub trait InferenceEngine<T: TokenType> {
    /// Names of the input tensors, in engine order, if the model carries metadata.
    fn input_tensor_names(&self) -> Option<Vec<String>> {
        None
    }

    /// Names of the output tensors, in engine order, if the model carries metadata.
    fn output_tensor_names(&self) -> Option<Vec<String>> {
        None
    }

    /// Run the model.
    ///
    /// ## Arguments
    /// * `inputs` - the three input tensors, in the order of
    ///   [`TensorLayout::inputs`](crate::client::TensorLayout::inputs).
    ///
    /// ## Returns
    /// The output tensors.
    fn run(
        &mut self,
        inputs: [&[T]; 3],
    ) -> QaResult<Vec<Vec<f32>>>;
}
