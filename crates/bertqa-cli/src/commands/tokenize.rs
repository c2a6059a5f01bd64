use std::io::{BufRead, Write};

use bertqa::FullTokenizer;

use crate::{
    io_args::{LinesArgs, OutputArgs},
    vocab_args::VocabArgs,
};

/// Placeholder written for a token with no vocabulary id.
const MISSING_ID: &str = "?";

/// Args for the tokenize command.
#[derive(clap::Args, Debug)]
pub struct TokenizeArgs {
    #[command(flatten)]
    vocab: VocabArgs,

    /// Emit vocabulary ids instead of wordpieces.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    ids: bool,

    #[command(flatten)]
    input: LinesArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl TokenizeArgs {
    /// Run the tokenize command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = FullTokenizer::new(self.vocab.load_vocab()?, self.vocab.do_lower_case());

        let mut reader = self.input.open()?;
        let mut writer = self.output.open()?;

        run_tokenize(&mut reader, &mut writer, &tokenizer, self.ids)
    }
}

/// Write one line of space-separated wordpieces (or ids) per input line.
fn run_tokenize(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &FullTokenizer<u32>,
    ids: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let tokens = tokenizer.tokenize(&line?);

        let fields: Vec<String> = if ids {
            tokenizer
                .convert_tokens_to_ids(&tokens)
                .into_iter()
                .map(|id| id.map_or_else(|| MISSING_ID.to_string(), |id| id.to_string()))
                .collect()
        } else {
            tokens
        };

        writeln!(writer, "{}", fields.join(" "))?;
        writer.flush()?;
    }
    Ok(())
}
