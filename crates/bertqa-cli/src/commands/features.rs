use std::io::Write;

use bertqa::FeatureConverter;

use crate::{
    io_args::{OutputArgs, PassageArgs, write_json},
    vocab_args::FeatureArgs,
};

/// Args for the features command.
#[derive(clap::Args, Debug)]
pub struct FeaturesArgs {
    #[command(flatten)]
    feature: FeatureArgs,

    #[command(flatten)]
    passage: PassageArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl FeaturesArgs {
    /// Run the features command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let converter = self.feature.load_converter()?;
        let context = self.passage.context()?;

        let mut writer = self.output.open()?;
        write_feature(
            &mut writer,
            &converter,
            &self.passage.query,
            &context,
            self.output.pretty(),
        )?;
        writer.flush()?;
        Ok(())
    }
}

/// Convert one pair and write the feature as json.
fn write_feature<W: Write>(
    writer: &mut W,
    converter: &FeatureConverter<u32>,
    query: &str,
    context: &str,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let feature = converter.convert(query, context)?;
    log::info!(
        "{} real tokens, {} context words",
        feature.tokens().len(),
        feature.original_tokens().len()
    );
    write_json(writer, &feature, pretty)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bertqa::{FeatureConverterOptions, WordpieceVocab};
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn test_feature_json() {
        let vocab = WordpieceVocab::from_tokens(["[PAD]", "[UNK]", "[CLS]", "[SEP]", "sky", "blue"])
            .unwrap();
        let converter = FeatureConverterOptions::default()
            .with_max_query_len(2)
            .with_max_seq_len(8)
            .build(Arc::new(vocab))
            .unwrap();

        let mut buf: Vec<u8> = Vec::new();
        write_feature(&mut buf, &converter, "sky", "Blue sky", false).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 1);

        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            json!({
                "tokens": ["[CLS]", "sky", "[SEP]", "blue", "sky", "[SEP]"],
                "input_ids": [2, 4, 3, 5, 4, 3, 0, 0],
                "input_mask": [1, 1, 1, 1, 1, 1, 0, 0],
                "segment_ids": [0, 0, 0, 1, 1, 1, 0, 0],
                "original_tokens": ["Blue", "sky"],
                "token_to_original_map": {"3": 0, "4": 1},
            })
        );
    }
}
