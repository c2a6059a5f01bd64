use serde::{Deserialize, Serialize};

use crate::{
    errors::{QaError, QaResult},
    features::Feature,
    types::TokenType,
};

/// Metadata name of the token id input.
pub const IDS_TENSOR_NAME: &str = "ids";

/// Metadata name of the attention mask input.
pub const MASK_TENSOR_NAME: &str = "mask";

/// Metadata name of the segment id input.
pub const SEGMENT_IDS_TENSOR_NAME: &str = "segment_ids";

/// Metadata name of the start logits output.
pub const START_LOGITS_TENSOR_NAME: &str = "start_logits";

/// Metadata name of the end logits output.
pub const END_LOGITS_TENSOR_NAME: &str = "end_logits";

/// The three model inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputTensor {
    /// Token ids.
    Ids,
    /// Attention mask.
    Mask,
    /// Segment ids.
    SegmentIds,
}

impl InputTensor {
    /// The metadata name of the tensor.
    pub fn name(&self) -> &'static str {
        match self {
            InputTensor::Ids => IDS_TENSOR_NAME,
            InputTensor::Mask => MASK_TENSOR_NAME,
            InputTensor::SegmentIds => SEGMENT_IDS_TENSOR_NAME,
        }
    }

    /// Look up a tensor by metadata name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            IDS_TENSOR_NAME => Some(InputTensor::Ids),
            MASK_TENSOR_NAME => Some(InputTensor::Mask),
            SEGMENT_IDS_TENSOR_NAME => Some(InputTensor::SegmentIds),
            _ => None,
        }
    }

    /// Select this tensor's data from a feature.
    pub fn select<'a, T: TokenType>(
        &self,
        feature: &'a Feature<T>,
    ) -> &'a [T] {
        match self {
            InputTensor::Ids => feature.input_ids(),
            InputTensor::Mask => feature.input_mask(),
            InputTensor::SegmentIds => feature.segment_ids(),
        }
    }
}

/// Input order and output positions of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TensorLayout {
    inputs: [InputTensor; 3],
    start_logits_index: usize,
    end_logits_index: usize,
}

impl Default for TensorLayout {
    /// Inputs ids, mask, segment ids; outputs end logits then start logits.
    fn default() -> Self {
        Self {
            inputs: [InputTensor::Ids, InputTensor::Mask, InputTensor::SegmentIds],
            start_logits_index: 1,
            end_logits_index: 0,
        }
    }
}

impl TensorLayout {
    /// Resolve a layout from optional tensor name metadata.
    ///
    /// Inputs and outputs resolve independently; each falls back to the
    /// default order unless its names are complete and unambiguous.
    pub fn resolve<S: AsRef<str>>(
        input_names: Option<&[S]>,
        output_names: Option<&[S]>,
    ) -> Self {
        let mut layout = Self::default();

        if let Some(names) = input_names {
            match resolve_inputs(names) {
                Some(inputs) => layout.inputs = inputs,
                None => log::warn!(
                    "input tensor names {:?} don't match the default names; using the default order",
                    name_list(names)
                ),
            }
        }

        if let Some(names) = output_names {
            match resolve_outputs(names) {
                Some((start, end)) => {
                    layout.start_logits_index = start;
                    layout.end_logits_index = end;
                }
                None => log::warn!(
                    "output tensor names {:?} don't match the default names; using the default order",
                    name_list(names)
                ),
            }
        }

        layout
    }

    /// The engine order of the inputs.
    pub fn inputs(&self) -> &[InputTensor; 3] {
        &self.inputs
    }

    /// The engine output index of the start logits.
    pub fn start_logits_index(&self) -> usize {
        self.start_logits_index
    }

    /// The engine output index of the end logits.
    pub fn end_logits_index(&self) -> usize {
        self.end_logits_index
    }

    /// Arrange a feature's tensors in engine order.
    pub fn order_inputs<'a, T: TokenType>(
        &self,
        feature: &'a Feature<T>,
    ) -> [&'a [T]; 3] {
        self.inputs.map(|tensor| tensor.select(feature))
    }

    /// Pick `(start_logits, end_logits)` out of the engine outputs.
    pub fn split_outputs(
        &self,
        mut outputs: Vec<Vec<f32>>,
    ) -> QaResult<(Vec<f32>, Vec<f32>)> {
        if outputs.len() != 2 {
            return Err(QaError::TensorShape(format!(
                "expected 2 output tensors, got {}",
                outputs.len()
            )));
        }
        let start = std::mem::take(&mut outputs[self.start_logits_index]);
        let end = std::mem::take(&mut outputs[self.end_logits_index]);
        Ok((start, end))
    }
}

fn name_list<S: AsRef<str>>(names: &[S]) -> Vec<&str> {
    names.iter().map(|name| name.as_ref()).collect()
}

fn resolve_inputs<S: AsRef<str>>(names: &[S]) -> Option<[InputTensor; 3]> {
    let names = name_list(names);
    let [a, b, c] = names[..] else {
        return None;
    };
    let inputs = [
        InputTensor::from_name(a)?,
        InputTensor::from_name(b)?,
        InputTensor::from_name(c)?,
    ];
    if inputs[0] == inputs[1] || inputs[0] == inputs[2] || inputs[1] == inputs[2] {
        return None;
    }
    Some(inputs)
}

fn resolve_outputs<S: AsRef<str>>(names: &[S]) -> Option<(usize, usize)> {
    let names = name_list(names);
    match names[..] {
        [START_LOGITS_TENSOR_NAME, END_LOGITS_TENSOR_NAME] => Some((0, 1)),
        [END_LOGITS_TENSOR_NAME, START_LOGITS_TENSOR_NAME] => Some((1, 0)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_tensor_names() {
        for tensor in [InputTensor::Ids, InputTensor::Mask, InputTensor::SegmentIds] {
            assert_eq!(InputTensor::from_name(tensor.name()), Some(tensor));
        }
        assert_eq!(InputTensor::from_name("input_ids"), None);
    }

    #[test]
    fn test_default_layout() {
        let layout = TensorLayout::resolve::<&str>(None, None);
        assert_eq!(layout, TensorLayout::default());
        assert_eq!(
            layout.inputs(),
            &[InputTensor::Ids, InputTensor::Mask, InputTensor::SegmentIds]
        );
        assert_eq!(layout.end_logits_index(), 0);
        assert_eq!(layout.start_logits_index(), 1);
    }

    #[test]
    fn test_resolve_from_names() {
        let layout = TensorLayout::resolve(
            Some(&["segment_ids", "ids", "mask"][..]),
            Some(&["start_logits", "end_logits"][..]),
        );
        assert_eq!(
            layout.inputs(),
            &[InputTensor::SegmentIds, InputTensor::Ids, InputTensor::Mask]
        );
        assert_eq!(layout.start_logits_index(), 0);
        assert_eq!(layout.end_logits_index(), 1);
    }

    #[test]
    fn test_resolve_falls_back() {
        let default = TensorLayout::default();

        // unknown name.
        let layout = TensorLayout::resolve(Some(&["ids", "mask", "type_ids"][..]), None);
        assert_eq!(layout, default);

        // duplicate name.
        let layout = TensorLayout::resolve(Some(&["ids", "ids", "mask"][..]), None);
        assert_eq!(layout, default);

        // wrong count.
        let layout = TensorLayout::resolve(
            Some(&["mask", "ids"][..]),
            Some(&["start_logits", "end_logits", "extra"][..]),
        );
        assert_eq!(layout, default);

        // outputs resolve independently of a bad input set.
        let layout = TensorLayout::resolve(
            Some(&["x", "y", "z"][..]),
            Some(&["start_logits", "end_logits"][..]),
        );
        assert_eq!(layout.inputs(), default.inputs());
        assert_eq!(layout.start_logits_index(), 0);
    }

    #[test]
    fn test_split_outputs() {
        let layout = TensorLayout::default();
        let (start, end) = layout
            .split_outputs(vec![vec![1.0, 2.0], vec![3.0, 4.0]])
            .unwrap();
        assert_eq!(start, vec![3.0, 4.0]);
        assert_eq!(end, vec![1.0, 2.0]);

        assert!(matches!(
            layout.split_outputs(vec![vec![1.0]]),
            Err(QaError::TensorShape(_))
        ));
    }
}
