//! Word-list dictionaries for language identification.
//!
//! A dictionary directory holds one `<code>.dict` file per language with one
//! word per line. Blank lines and lines starting with `#` are skipped.

use std::fs;
use std::io;
use std::path::Path;

use numeral_core::WordListIdentifier;

pub const DICT_EXTENSION: &str = "dict";

#[derive(Debug, thiserror::Error)]
pub enum DictSourceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Build an identifier from every `*.dict` file in `dir`.
pub fn load_word_lists(dir: &Path) -> Result<WordListIdentifier, DictSourceError> {
    let mut lists = Vec::new();
    for path in list_dict_files(dir)? {
        let code = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let words = read_word_list(&path)?;
        if words.is_empty() {
            return Err(DictSourceError::Parse(format!(
                "{} contains no words",
                path.display()
            )));
        }
        lists.push((code, words));
    }
    Ok(WordListIdentifier::from_word_lists(lists))
}

/// Words of one dictionary file, in file order.
pub fn read_word_list(path: &Path) -> Result<Vec<String>, DictSourceError> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// `*.dict` files in `dir`, sorted by name; an error if there are none.
fn list_dict_files(dir: &Path) -> Result<Vec<std::path::PathBuf>, DictSourceError> {
    let mut files: Vec<_> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().is_some_and(|ext| ext == DICT_EXTENSION)
        })
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(DictSourceError::Parse(format!(
            "no *.{DICT_EXTENSION} files found in {}",
            dir.display()
        )));
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use numeral_core::LanguageIdentifier;

    use super::*;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn loads_every_dict_file() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "en.dict", "# english\none\ntwo\n\nthree\n");
        write(dir.path(), "FR.dict", "un\ndeux\ntrois\n");
        write(dir.path(), "notes.txt", "ignored\n");

        let id = load_word_lists(dir.path()).unwrap();
        assert_eq!(id.languages().collect::<Vec<_>>(), vec!["en", "fr"]);
        assert_eq!(id.identify("deux trois").as_deref(), Some("fr"));
        assert_eq!(id.identify("one two").as_deref(), Some("en"));
    }

    #[test]
    fn read_word_list_skips_comments() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "ru.dict", "  один \n#comment\n\nдва\n");
        let words = read_word_list(&dir.path().join("ru.dict")).unwrap();
        assert_eq!(words, vec!["один", "два"]);
    }

    #[test]
    fn error_no_dict_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "readme.md", "nothing here");
        let err = load_word_lists(dir.path()).unwrap_err();
        assert!(matches!(err, DictSourceError::Parse(_)));
        assert!(err.to_string().contains("*.dict"));
    }

    #[test]
    fn error_empty_dict_file() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "en.dict", "# only a comment\n");
        assert!(matches!(
            load_word_lists(dir.path()),
            Err(DictSourceError::Parse(_))
        ));
    }

    #[test]
    fn error_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_word_lists(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, DictSourceError::Io(_)));
    }
}
