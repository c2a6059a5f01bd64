use std::io::Write;

use bertqa::dataset::{QaDataset, load_dataset_path};

use crate::io_args::OutputArgs;

/// Args for the dataset command.
#[derive(clap::Args, Debug)]
pub struct DatasetArgs {
    /// Path to the dataset json.
    #[arg(long)]
    path: String,

    /// Show one passage and its questions, instead of listing titles.
    #[arg(long, default_value = None)]
    index: Option<usize>,

    #[command(flatten)]
    output: OutputArgs,
}

impl DatasetArgs {
    /// Run the dataset command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let dataset = load_dataset_path(&self.path)?;

        let mut writer = self.output.open()?;
        write_dataset(&mut writer, &dataset, self.index)?;
        writer.flush()?;
        Ok(())
    }
}

/// List `index<TAB>title` lines, or render one passage with its questions.
fn write_dataset(
    writer: &mut dyn Write,
    dataset: &QaDataset,
    index: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(idx) = index else {
        for (idx, title) in dataset.titles().iter().enumerate() {
            writeln!(writer, "{idx}\t{title}")?;
        }
        return Ok(());
    };

    let (Some(title), Some(content), Some(questions)) = (
        dataset.title(idx),
        dataset.content(idx),
        dataset.questions(idx),
    ) else {
        return Err(format!(
            "index {idx} out of range; dataset has {} passages",
            dataset.len()
        )
        .into());
    };

    writeln!(writer, "# {title}")?;
    writeln!(writer)?;
    writeln!(writer, "{content}")?;
    writeln!(writer)?;
    for question in questions {
        writeln!(writer, "- {question}")?;
    }
    Ok(())
}
