use std::fs;
use std::path::{Path, PathBuf};

use passgen::default_word_list;

use crate::error::Error;

/// Environment variable naming a word list file to use instead of the built-in one.
pub const WORD_LIST_ENV: &str = "PASSGEN_WORD_LIST";

/// Returns the word list path from the PASSGEN_WORD_LIST environment variable,
/// if it is set and non-empty.
pub fn word_list_path_from_env() -> Option<PathBuf> {
    std::env::var_os(WORD_LIST_ENV).filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Where passphrase words come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordList {
    Builtin(&'static [&'static str]),
    Loaded { path: PathBuf, words: Vec<String> },
}

impl WordList {
    pub fn len(&self) -> usize {
        match self {
            WordList::Builtin(words) => words.len(),
            WordList::Loaded { words, .. } => words.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Picks the word list: the command line flag first, then the environment,
/// then the built-in list.
pub fn resolve_word_list(flag: Option<&Path>, env: Option<PathBuf>) -> Result<WordList, Error> {
    match flag.map(Path::to_path_buf).or(env) {
        Some(path) => {
            let words = load_word_list(&path)?;
            tracing::debug!(path = %path.display(), words = words.len(), "loaded word list");
            Ok(WordList::Loaded { path, words })
        }
        None => Ok(WordList::Builtin(default_word_list())),
    }
}

/// Reads one word per line, trimming whitespace and skipping blank lines.
///
/// The size of the list is not checked here; the generator reports lists that
/// are too small.
pub fn load_word_list(path: &Path) -> Result<Vec<String>, Error> {
    let contents = fs::read_to_string(path)
        .map_err(|source| Error::WordList { path: path.to_path_buf(), source })?;
    Ok(parse_word_list(&contents))
}

pub fn parse_word_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_word_list() {
        let words = parse_word_list("alpha\n  bravo \r\n\n\t\ncharlie");
        assert_eq!(words, vec!["alpha", "bravo", "charlie"]);
        assert!(parse_word_list("\n \n").is_empty());
    }

    #[test]
    fn test_load_word_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Apple\n\nbanana  \n cherry").unwrap();

        let words = load_word_list(file.path()).unwrap();
        assert_eq!(words, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_load_missing_word_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = load_word_list(&path).unwrap_err();
        match &err {
            Error::WordList { path: p, .. } => assert_eq!(p, &path),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_resolve_prefers_flag() {
        let mut flag_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(flag_file, "from\nflag").unwrap();
        let mut env_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(env_file, "from\nenv").unwrap();

        let list =
            resolve_word_list(Some(flag_file.path()), Some(env_file.path().to_path_buf())).unwrap();
        match list {
            WordList::Loaded { words, .. } => assert_eq!(words, vec!["from", "flag"]),
            other => panic!("unexpected word list: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_falls_back_to_env() {
        let mut env_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(env_file, "one\ntwo\nthree").unwrap();

        let list = resolve_word_list(None, Some(env_file.path().to_path_buf())).unwrap();
        assert_eq!(list.len(), 3);
        assert!(matches!(list, WordList::Loaded { ref path, .. } if path == env_file.path()));
    }

    #[test]
    fn test_resolve_builtin() {
        let list = resolve_word_list(None, None).unwrap();
        assert_eq!(list, WordList::Builtin(default_word_list()));
        assert_eq!(list.len(), passgen::DEFAULT_WORD_LIST_SIZE);
        assert!(!list.is_empty());
    }

    #[test]
    fn test_resolve_blank_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "\n  \n").unwrap();

        let list = resolve_word_list(Some(file.path()), None).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }
}
