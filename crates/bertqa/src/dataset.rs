//! # Passage Dataset
//!
//! Bundled passages and sample questions, in the json layout:
//!
//! ```json
//! {
//!   "titles": [["Title A"], ["Title B"]],
//!   "contents": [["Passage A..."], ["Passage B..."]],
//!   "questions": [["Question A1?", "Question A2?"], ["Question B1?"]]
//! }
//! ```

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::errors::{QaError, QaResult};

#[derive(Deserialize)]
struct RawDataset {
    titles: Vec<Vec<String>>,
    contents: Vec<Vec<String>>,
    questions: Vec<Vec<String>>,
}

/// Titled passages, each with a list of sample questions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QaDataset {
    titles: Vec<String>,
    contents: Vec<String>,
    questions: Vec<Vec<String>>,
}

impl QaDataset {
    /// Create a dataset from parallel lists.
    ///
    /// All three lists must have the same length.
    pub fn new(
        titles: Vec<String>,
        contents: Vec<String>,
        questions: Vec<Vec<String>>,
    ) -> QaResult<Self> {
        if titles.len() != contents.len() || titles.len() != questions.len() {
            return Err(QaError::Parse(format!(
                "dataset lists differ in length: titles={} contents={} questions={}",
                titles.len(),
                contents.len(),
                questions.len()
            )));
        }
        Ok(Self {
            titles,
            contents,
            questions,
        })
    }

    /// The number of passages.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Check if the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// All passage titles.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// The title of passage `index`.
    pub fn title(
        &self,
        index: usize,
    ) -> Option<&str> {
        self.titles.get(index).map(String::as_str)
    }

    /// The text of passage `index`.
    pub fn content(
        &self,
        index: usize,
    ) -> Option<&str> {
        self.contents.get(index).map(String::as_str)
    }

    /// The sample questions of passage `index`.
    pub fn questions(
        &self,
        index: usize,
    ) -> Option<&[String]> {
        self.questions.get(index).map(Vec::as_slice)
    }
}

fn first_of_each(
    field: &str,
    lists: Vec<Vec<String>>,
) -> QaResult<Vec<String>> {
    lists
        .into_iter()
        .enumerate()
        .map(|(idx, list)| {
            list.into_iter()
                .next()
                .ok_or_else(|| QaError::Parse(format!("{field}[{idx}] is empty")))
        })
        .collect()
}

/// Read a [`QaDataset`] from json.
pub fn read_dataset<R: Read>(reader: R) -> QaResult<QaDataset> {
    let raw: RawDataset = serde_json::from_reader(reader)?;
    QaDataset::new(
        first_of_each("titles", raw.titles)?,
        first_of_each("contents", raw.contents)?,
        raw.questions,
    )
}

/// Load a [`QaDataset`] from a json file.
pub fn load_dataset_path<P: AsRef<Path>>(path: P) -> QaResult<QaDataset> {
    let path = path.as_ref();
    let dataset = read_dataset(BufReader::new(File::open(path)?))?;
    log::info!("loaded {} passages from {}", dataset.len(), path.display());
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"{
        "titles": [["Sky"], ["Sea"]],
        "contents": [["The sky is blue."], ["The sea is deep."]],
        "questions": [["What color is the sky?"], ["How deep is the sea?", "Is it wet?"]]
    }"#;

    #[test]
    fn test_read_dataset() {
        let dataset = read_dataset(SAMPLE.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 2);
        assert!(!dataset.is_empty());
        assert_eq!(dataset.titles(), &["Sky", "Sea"]);
        assert_eq!(dataset.title(1), Some("Sea"));
        assert_eq!(dataset.content(0), Some("The sky is blue."));
        assert_eq!(
            dataset.questions(1),
            Some(&["How deep is the sea?".to_string(), "Is it wet?".to_string()][..])
        );
        assert_eq!(dataset.content(2), None);
        assert_eq!(dataset.questions(2), None);
    }

    #[test]
    fn test_read_dataset_errors() {
        let empty_title = r#"{"titles": [[]], "contents": [["x"]], "questions": [[]]}"#;
        assert!(matches!(
            read_dataset(empty_title.as_bytes()),
            Err(QaError::Parse(_))
        ));

        let mismatched = r#"{"titles": [["a"]], "contents": [], "questions": [[]]}"#;
        assert!(matches!(
            read_dataset(mismatched.as_bytes()),
            Err(QaError::Parse(_))
        ));

        assert!(matches!(
            read_dataset("not json".as_bytes()),
            Err(QaError::Json(_))
        ));
    }

    #[test]
    fn test_load_dataset_path() {
        tempdir::TempDir::new("dataset_test")
            .and_then(|dir| {
                let path = dir.path().join("qa.json");
                File::create(&path)?.write_all(SAMPLE.as_bytes())?;

                let dataset = load_dataset_path(&path).expect("Failed to load dataset");
                assert_eq!(dataset.len(), 2);

                Ok(())
            })
            .unwrap();
    }
}
