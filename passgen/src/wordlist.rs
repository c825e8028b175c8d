//! Built-in passphrase word list.
//!
//! Short, common, lowercase English words, one per line, embedded at compile
//! time and parsed once on first access.

use std::sync::OnceLock;

/// Number of words in the built-in list (about 9.6 bits of entropy per word).
pub const DEFAULT_WORD_LIST_SIZE: usize = 797;

const DEFAULT_WORDS_RAW: &str = include_str!("words.txt");

static DEFAULT_WORDS: OnceLock<Box<[&'static str]>> = OnceLock::new();

/// Returns the built-in word list.
pub fn default_word_list() -> &'static [&'static str] {
    DEFAULT_WORDS.get_or_init(|| {
        DEFAULT_WORDS_RAW
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    })
}
