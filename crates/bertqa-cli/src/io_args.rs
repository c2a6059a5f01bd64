//! Argument groups for what the commands read and write.
//!
//! Every path argument accepts `-` for standard input or output.

use std::{
    error::Error,
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Read, Write},
};

use serde::{Deserialize, Serialize};

/// A path, or `None` for standard io.
fn file_path(path: Option<&str>) -> Option<&str> {
    path.filter(|p| *p != "-")
}

fn open_read(path: Option<&str>) -> io::Result<Box<dyn BufRead>> {
    Ok(match file_path(path) {
        Some(p) => Box::new(BufReader::new(File::open(p)?)),
        None => Box::new(BufReader::new(io::stdin().lock())),
    })
}

/// Line-oriented input for the streaming commands.
#[derive(clap::Args, Debug)]
pub struct LinesArgs {
    /// File to read lines from; stdin when absent.
    #[arg(long)]
    input: Option<String>,
}

impl LinesArgs {
    /// Open the line source.
    pub fn open(&self) -> io::Result<Box<dyn BufRead>> {
        open_read(self.input.as_deref())
    }
}

/// A question and the passage to answer it from.
#[derive(clap::Args, Debug)]
pub struct PassageArgs {
    /// The question.
    #[arg(long)]
    pub query: String,

    /// The passage text.
    #[arg(long, conflicts_with = "context_file", required_unless_present = "context_file")]
    context: Option<String>,

    /// Read the passage from a file instead.
    #[arg(long)]
    context_file: Option<String>,
}

impl PassageArgs {
    /// The passage, read from `--context-file` when no inline text was given.
    pub fn context(&self) -> io::Result<String> {
        if let Some(text) = &self.context {
            return Ok(text.clone());
        }
        let mut text = String::new();
        open_read(self.context_file.as_deref())?.read_to_string(&mut text)?;
        Ok(text)
    }
}

/// Start and end logits of one model run.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Logits {
    /// Per-position start logits.
    pub start_logits: Vec<f32>,

    /// Per-position end logits.
    pub end_logits: Vec<f32>,
}

/// Precomputed model output, standing in for an inference engine.
#[derive(clap::Args, Debug)]
pub struct LogitsArgs {
    /// Json file with `start_logits` and `end_logits` arrays.
    #[arg(long)]
    logits: String,
}

impl LogitsArgs {
    /// Read and parse the logits file.
    pub fn read(&self) -> Result<Logits, Box<dyn Error>> {
        let logits = read_logits(open_read(Some(self.logits.as_str()))?)?;
        log::debug!(
            "read {} start and {} end logits",
            logits.start_logits.len(),
            logits.end_logits.len()
        );
        Ok(logits)
    }
}

/// Parse a [`Logits`] json document.
pub fn read_logits<R: Read>(reader: R) -> serde_json::Result<Logits> {
    serde_json::from_reader(reader)
}

/// Output target, and how json results are rendered.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// File to write to; stdout when absent.
    #[arg(long)]
    output: Option<String>,

    /// Pretty-print json results.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pretty: bool,
}

impl OutputArgs {
    /// Open the output target.
    pub fn open(&self) -> io::Result<Box<dyn Write>> {
        Ok(match file_path(self.output.as_deref()) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(io::stdout().lock())),
        })
    }

    /// Should json results be pretty-printed?
    pub fn pretty(&self) -> bool {
        self.pretty
    }
}

/// Write `value` as one json document, followed by a newline.
pub fn write_json<W: Write, S: Serialize>(
    writer: &mut W,
    value: &S,
    pretty: bool,
) -> Result<(), Box<dyn Error>> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    } else {
        serde_json::to_writer(&mut *writer, value)?;
    }
    writeln!(writer)?;
    Ok(())
}
