//! Password and passphrase generation from a cryptographically secure source.
//!
//! Every character or word is picked with an unbiased rejection sampler over
//! the candidate set, so a 57 character alphabet gives each character exactly
//! the same probability instead of favouring the first few as `byte % 57`
//! would.
//!
//! Generation is all-or-nothing: parameters are validated before any random
//! bytes are read, and a failed read discards the whole batch.
//!
//! ```no_run
//! use passgen::{ALPHABET_DEFAULT, PassphraseCasing, default_word_list};
//!
//! let passwords = passgen::generate_passwords(3, 20, ALPHABET_DEFAULT)?;
//! let phrases =
//!     passgen::generate_passphrases(1, 6, '-', PassphraseCasing::Title, default_word_list())?;
//! # Ok::<(), passgen::Error>(())
//! ```
//!
//! The random source is injected. [`Generator::new`] reads from the operating
//! system; [`Generator::with_source`] accepts any [`RandomSource`].

pub mod casing;
pub mod error;
pub mod passphrase;
pub mod password;
pub mod sampler;
pub mod source;
pub mod wordlist;

pub use casing::PassphraseCasing;
pub use error::{Error, Result};
pub use sampler::sample_index;
pub use source::{OsRandom, RandomSource, ReaderSource};
pub use wordlist::{DEFAULT_WORD_LIST_SIZE, default_word_list};

/// Fewest passwords per batch.
pub const PASSWORD_COUNT_MIN: usize = 1;
/// Most passwords per batch.
pub const PASSWORD_COUNT_MAX: usize = 1024;
pub const PASSWORD_COUNT_DEFAULT: usize = 1;

/// Shortest allowed password, in characters.
pub const PASSWORD_LENGTH_MIN: usize = 5;
/// Longest allowed password, in characters.
pub const PASSWORD_LENGTH_MAX: usize = 1024;
pub const PASSWORD_LENGTH_DEFAULT: usize = 16;

/// Smallest usable alphabet, in characters.
pub const ALPHABET_LENGTH_MIN: usize = 2;
/// Lowercase English letters without `l`.
pub const ALPHABET_LOWER: &str = "abcdefghijkmnopqrstuvwxyz";
pub const ALPHABET_LOWER_AMBIGUOUS: &str = "labcdefghijkmnopqrstuvwxyz";
/// Uppercase English letters without `I` and `O`.
pub const ALPHABET_UPPER: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ";
pub const ALPHABET_UPPER_AMBIGUOUS: &str = "IOABCDEFGHJKLMNPQRSTUVWXYZ";
/// Digits without `0` and `1`.
pub const ALPHABET_NUMERIC: &str = "23456789";
pub const ALPHABET_NUMERIC_AMBIGUOUS: &str = "0123456789";
pub const ALPHABET_SPECIAL: &str = "!@#$%^&*_-+=";
/// Letters and digits with the visually ambiguous `0 O 1 I l` removed.
pub const ALPHABET_DEFAULT: &str =
    "abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Fewest passphrases per batch.
pub const PASSPHRASE_COUNT_MIN: usize = 1;
/// Most passphrases per batch.
pub const PASSPHRASE_COUNT_MAX: usize = 1024;
pub const PASSPHRASE_COUNT_DEFAULT: usize = 1;

/// Fewest words per passphrase.
pub const PASSPHRASE_WORD_COUNT_MIN: usize = 3;
/// Most words per passphrase.
pub const PASSPHRASE_WORD_COUNT_MAX: usize = 64;
pub const PASSPHRASE_WORD_COUNT_DEFAULT: usize = 6;

pub const PASSPHRASE_SEPARATOR_DEFAULT: char = '-';
pub const PASSPHRASE_CASING_DEFAULT: PassphraseCasing = PassphraseCasing::Lower;

/// Smallest usable word list.
pub const WORD_LIST_LENGTH_MIN: usize = 2;

/// Generates passwords and passphrases from a single random source.
///
/// The generator keeps no state between calls other than the source itself.
#[derive(Debug, Clone, Default)]
pub struct Generator<S = OsRandom> {
    source: S,
}

impl Generator<OsRandom> {
    /// Creates a generator backed by the operating system CSPRNG.
    pub fn new() -> Self {
        Self { source: OsRandom }
    }
}

impl<S: RandomSource> Generator<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Generates `count` passwords of `length` characters drawn from `alphabet`.
    ///
    /// Fails with [`Error::InvalidCount`], [`Error::InvalidLength`] or
    /// [`Error::InvalidAlphabet`] before reading any randomness, and with a
    /// random source error if a draw fails. No passwords are returned on error.
    pub fn passwords(
        &mut self,
        count: usize,
        length: usize,
        alphabet: &str,
    ) -> Result<Vec<String>> {
        password::assemble_passwords(&mut self.source, count, length, alphabet)
    }

    /// Generates `count` passphrases of `word_count` words from `word_list`,
    /// each word cased per `casing` and joined with `separator`.
    ///
    /// `casing` may be a [`PassphraseCasing`] or a raw `u8` / `&str` to be
    /// validated. Checks run in the order count, word count, casing, word list.
    pub fn passphrases<C, W>(
        &mut self,
        count: usize,
        word_count: usize,
        separator: char,
        casing: C,
        word_list: &[W],
    ) -> Result<Vec<String>>
    where
        C: TryInto<PassphraseCasing>,
        Error: From<C::Error>,
        W: AsRef<str>,
    {
        passphrase::assemble_passphrases(
            &mut self.source,
            count,
            word_count,
            separator,
            casing,
            word_list,
        )
    }
}

/// Generates passwords with the operating system CSPRNG.
///
/// See [`Generator::passwords`].
pub fn generate_passwords(count: usize, length: usize, alphabet: &str) -> Result<Vec<String>> {
    Generator::new().passwords(count, length, alphabet)
}

/// Generates passphrases with the operating system CSPRNG.
///
/// See [`Generator::passphrases`].
pub fn generate_passphrases<C, W>(
    count: usize,
    word_count: usize,
    separator: char,
    casing: C,
    word_list: &[W],
) -> Result<Vec<String>>
where
    C: TryInto<PassphraseCasing>,
    Error: From<C::Error>,
    W: AsRef<str>,
{
    Generator::new().passphrases(count, word_count, separator, casing, word_list)
}
