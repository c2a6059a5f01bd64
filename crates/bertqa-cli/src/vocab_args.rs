use std::sync::Arc;

use bertqa::{FeatureConverter, FeatureConverterOptions, WordpieceVocab, vocab::io::load_vocab_path};

/// Vocabulary arg group.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    /// Path to a one-token-per-line vocabulary file.
    #[arg(long)]
    vocab: String,

    /// Keep case; by default ASCII letters are lowercased.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    cased: bool,
}

impl VocabArgs {
    /// Should input be lowercased?
    pub fn do_lower_case(&self) -> bool {
        !self.cased
    }

    /// Load the vocabulary.
    pub fn load_vocab(&self) -> Result<Arc<WordpieceVocab<u32>>, Box<dyn std::error::Error>> {
        Ok(Arc::new(load_vocab_path(&self.vocab)?))
    }
}

/// Feature shape arg group.
#[derive(clap::Args, Debug)]
pub struct FeatureArgs {
    #[command(flatten)]
    pub vocab: VocabArgs,

    /// Query tokens beyond this count are dropped.
    #[arg(long, default_value_t = 64)]
    max_query_len: usize,

    /// Length of the model input arrays.
    #[arg(long, default_value_t = 384)]
    max_seq_len: usize,
}

impl FeatureArgs {
    /// The converter options.
    pub fn options(&self) -> FeatureConverterOptions {
        FeatureConverterOptions::default()
            .with_do_lower_case(self.vocab.do_lower_case())
            .with_max_query_len(self.max_query_len)
            .with_max_seq_len(self.max_seq_len)
    }

    /// Load the vocabulary and build a converter.
    pub fn load_converter(&self) -> Result<FeatureConverter<u32>, Box<dyn std::error::Error>> {
        let vocab = self.vocab.load_vocab()?;
        Ok(self.options().build(vocab)?)
    }
}
