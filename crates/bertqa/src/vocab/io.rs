//! # Vocabulary IO
//!
//! Vocabulary files hold one token per line; the 0-based line number is the id.
//!
//! ```terminaloutput
//! [PAD]
//! [UNK]
//! [CLS]
//! [SEP]
//! the
//! ##s
//! ```

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{errors::QaResult, types::TokenType, vocab::WordpieceVocab};

/// Load a [`WordpieceVocab`] from a vocabulary file.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_vocab_path<T, P>(path: P) -> QaResult<WordpieceVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let vocab = read_vocab(reader)?;
    log::info!("loaded {} vocab tokens from {}", vocab.len(), path.display());
    Ok(vocab)
}

/// Read a [`WordpieceVocab`] from a line reader.
///
/// A trailing `\r` is stripped from each line; blank lines still consume an id.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_vocab<T, R>(reader: R) -> QaResult<WordpieceVocab<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut tokens = Vec::new();
    for line in reader.lines() {
        let mut line = line?;
        if line.ends_with('\r') {
            line.pop();
        }
        tokens.push(line);
    }
    WordpieceVocab::from_tokens(tokens)
}

/// Save a [`WordpieceVocab`] to a vocabulary file.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_vocab_path<T: TokenType, P: AsRef<Path>>(
    vocab: &WordpieceVocab<T>,
    path: P,
) -> QaResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_vocab(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`WordpieceVocab`] to a [`Write`] writer.
///
/// Gaps in the id space are written as blank lines, so that line numbers
/// stay equal to ids.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `writer` - the writer to target.
pub fn write_vocab<T, W>(
    vocab: &WordpieceVocab<T>,
    writer: &mut W,
) -> QaResult<()>
where
    T: TokenType,
    W: Write,
{
    let mut next_id = 0usize;
    for (token, id) in vocab.to_token_list() {
        let id = id.to_usize().ok_or(crate::QaError::TokenOutOfRange)?;
        while next_id < id {
            writeln!(writer)?;
            next_id += 1;
        }
        writeln!(writer, "{token}")?;
        next_id = id + 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_read_vocab() {
        let data = "[PAD]\r\n[UNK]\n\nhello\n##lo\n";
        let vocab: WordpieceVocab<u32> = read_vocab(Cursor::new(data)).unwrap();

        assert_eq!(vocab.lookup_token("[PAD]"), Some(0));
        assert_eq!(vocab.lookup_token("[UNK]"), Some(1));
        assert_eq!(vocab.lookup_token(""), Some(2));
        assert_eq!(vocab.lookup_token("hello"), Some(3));
        assert_eq!(vocab.lookup_token("##lo"), Some(4));
        assert_eq!(vocab.len(), 5);
    }

    #[test]
    fn test_write_vocab_fills_gaps() {
        let mut map = crate::types::hash_map_with_capacity(2);
        map.insert("a".to_string(), 0u32);
        map.insert("c".to_string(), 2u32);
        let vocab = WordpieceVocab::from_map(map);

        let mut buf: Vec<u8> = Vec::new();
        write_vocab(&vocab, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a\n\nc\n");
    }

    #[test]
    fn test_save_load_vocab() {
        type T = u32;

        let vocab: WordpieceVocab<T> =
            WordpieceVocab::from_tokens(["[PAD]", "[UNK]", "[CLS]", "[SEP]", "un", "##aff"])
                .unwrap();

        tempdir::TempDir::new("vocab_test")
            .and_then(|dir| {
                let path = dir.path().join("vocab.txt");

                save_vocab_path(&vocab, &path).expect("Failed to save vocab");

                let loaded: WordpieceVocab<T> =
                    load_vocab_path(&path).expect("Failed to load vocab");

                assert_eq!(&loaded, &vocab);

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_vocab_path::<u32, _>("/definitely/not/a/vocab.txt");
        assert!(matches!(result, Err(crate::QaError::Io(_))));
    }
}
