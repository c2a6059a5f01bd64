use std::io::Write;

use bertqa::{Answer, AnswerExtractorOptions};

use crate::{
    io_args::{LogitsArgs, OutputArgs, PassageArgs},
    vocab_args::FeatureArgs,
};

/// Args for the answer command.
#[derive(clap::Args, Debug)]
pub struct AnswerArgs {
    #[command(flatten)]
    feature: FeatureArgs,

    #[command(flatten)]
    passage: PassageArgs,

    #[command(flatten)]
    logits: LogitsArgs,

    /// Number of answers to keep.
    #[arg(long, default_value_t = 5)]
    n_best: usize,

    /// Longest allowed answer span, in tokens.
    #[arg(long, default_value_t = 32)]
    max_answer_len: usize,

    #[command(flatten)]
    output: OutputArgs,
}

impl AnswerArgs {
    /// Run the answer command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let converter = self.feature.load_converter()?;
        let extractor = AnswerExtractorOptions::default()
            .with_n_best(self.n_best)
            .with_max_answer_len(self.max_answer_len)
            .build()?;

        let logits = self.logits.read()?;
        let feature = converter.convert(&self.passage.query, &self.passage.context()?)?;
        let answers = extractor.extract(&logits.start_logits, &logits.end_logits, &feature)?;

        let mut writer = self.output.open()?;
        write_answers(&mut writer, &answers)?;
        writer.flush()?;
        Ok(())
    }
}

/// One `score<TAB>start<TAB>end<TAB>text` line per answer.
fn write_answers(
    writer: &mut dyn Write,
    answers: &[Answer],
) -> std::io::Result<()> {
    if answers.is_empty() {
        return writeln!(writer, "no answer");
    }
    for answer in answers {
        let c = &answer.candidate;
        writeln!(writer, "{:.4}\t{}\t{}\t{}", c.score, c.start, c.end, answer.text)?;
    }
    Ok(())
}
