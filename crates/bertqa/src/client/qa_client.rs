use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    answers::{Answer, AnswerExtractor, AnswerExtractorOptions},
    client::{InferenceEngine, TensorLayout},
    errors::{QaError, QaResult},
    features::{FeatureConverter, FeatureConverterOptions},
    types::TokenType,
    vocab::WordpieceVocab,
};

/// Options for configuring a [`QaClient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QaClientOptions {
    /// Feature converter options.
    pub converter: FeatureConverterOptions,

    /// Answer extractor options.
    pub extractor: AnswerExtractorOptions,
}

impl QaClientOptions {
    /// Sets the converter options.
    pub fn with_converter(
        mut self,
        converter: FeatureConverterOptions,
    ) -> Self {
        self.converter = converter;
        self
    }

    /// Sets the extractor options.
    pub fn with_extractor(
        mut self,
        extractor: AnswerExtractorOptions,
    ) -> Self {
        self.extractor = extractor;
        self
    }

    /// Build a [`QaClient`] around an engine.
    pub fn build<T, E>(
        &self,
        vocab: Arc<WordpieceVocab<T>>,
        engine: E,
    ) -> QaResult<QaClient<T, E>>
    where
        T: TokenType,
        E: InferenceEngine<T>,
    {
        QaClient::new(vocab, *self, engine)
    }
}

/// End-to-end question answering over an [`InferenceEngine`].
///
/// `predict` takes `&mut self`: one client drives one engine handle at a time.
pub struct QaClient<T: TokenType, E: InferenceEngine<T>> {
    converter: FeatureConverter<T>,
    extractor: AnswerExtractor,
    layout: TensorLayout,
    engine: E,
}

impl<T, E> QaClient<T, E>
where
    T: TokenType,
    E: InferenceEngine<T>,
{
    /// Create a new client.
    ///
    /// The tensor layout is resolved once, from the engine's metadata.
    pub fn new(
        vocab: Arc<WordpieceVocab<T>>,
        options: QaClientOptions,
        engine: E,
    ) -> QaResult<Self> {
        let converter = options.converter.build(vocab)?;
        let extractor = options.extractor.build()?;

        let input_names = engine.input_tensor_names();
        let output_names = engine.output_tensor_names();
        let layout = TensorLayout::resolve(input_names.as_deref(), output_names.as_deref());
        log::debug!("tensor layout: {layout:?}");

        Ok(Self {
            converter,
            extractor,
            layout,
            engine,
        })
    }

    /// Get the feature converter.
    pub fn converter(&self) -> &FeatureConverter<T> {
        &self.converter
    }

    /// Get the answer extractor.
    pub fn extractor(&self) -> &AnswerExtractor {
        &self.extractor
    }

    /// Get the resolved tensor layout.
    pub fn layout(&self) -> &TensorLayout {
        &self.layout
    }

    /// Get the engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Get the engine, mutably.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Consume the client, returning the engine.
    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Answer `query` from `context`.
    ///
    /// ## Returns
    /// Ranked answers, best first; empty when no span qualifies.
    pub fn predict(
        &mut self,
        query: &str,
        context: &str,
    ) -> QaResult<Vec<Answer>> {
        log::debug!("converting feature");
        let feature = self.converter.convert(query, context)?;

        log::debug!("running inference");
        let inputs = self.layout.order_inputs(&feature);
        let outputs = self.engine.run(inputs)?;

        let (start_logits, end_logits) = self.layout.split_outputs(outputs)?;
        let expected = feature.max_seq_len();
        if start_logits.len() != expected || end_logits.len() != expected {
            return Err(QaError::TensorShape(format!(
                "expected logits of length {expected}, got start={} end={}",
                start_logits.len(),
                end_logits.len()
            )));
        }

        log::debug!("extracting answers");
        let answers = self
            .extractor
            .extract(&start_logits, &end_logits, &feature)?;
        log::debug!("found {} answers", answers.len());

        Ok(answers)
    }
}
