use crate::commands::{
    answer::AnswerArgs,
    dataset::DatasetArgs,
    features::FeaturesArgs,
    tokenize::TokenizeArgs,
};

pub mod answer;
pub mod dataset;
pub mod features;
pub mod tokenize;

/// Subcommands for bertqa
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Act as a streaming wordpiece tokenizer.
    Tokenize(TokenizeArgs),

    /// Print the model input feature for a question and passage.
    Features(FeaturesArgs),

    /// Rank answers from precomputed model logits.
    Answer(AnswerArgs),

    /// Browse a passage/question dataset.
    Dataset(DatasetArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Tokenize(cmd) => cmd.run(),
            Commands::Features(cmd) => cmd.run(),
            Commands::Answer(cmd) => cmd.run(),
            Commands::Dataset(cmd) => cmd.run(),
        }
    }
}
