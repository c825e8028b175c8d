use crate::error::{Error, Result};
use crate::sampler::sample_index;
use crate::source::RandomSource;
use crate::{
    ALPHABET_LENGTH_MIN, PASSWORD_COUNT_MAX, PASSWORD_COUNT_MIN, PASSWORD_LENGTH_MAX,
    PASSWORD_LENGTH_MIN,
};

/// Builds `count` passwords of `length` characters drawn from `alphabet`.
///
/// Parameters are checked before the source is read. The alphabet is indexed
/// by `char`, so multi-byte characters are picked whole.
pub(crate) fn assemble_passwords<S: RandomSource + ?Sized>(
    source: &mut S,
    count: usize,
    length: usize,
    alphabet: &str,
) -> Result<Vec<String>> {
    if !(PASSWORD_COUNT_MIN..=PASSWORD_COUNT_MAX).contains(&count) {
        return Err(Error::InvalidCount { count, min: PASSWORD_COUNT_MIN, max: PASSWORD_COUNT_MAX });
    }
    if !(PASSWORD_LENGTH_MIN..=PASSWORD_LENGTH_MAX).contains(&length) {
        return Err(Error::InvalidLength {
            length,
            min: PASSWORD_LENGTH_MIN,
            max: PASSWORD_LENGTH_MAX,
        });
    }
    let symbols: Vec<char> = alphabet.chars().collect();
    if symbols.len() < ALPHABET_LENGTH_MIN {
        return Err(Error::InvalidAlphabet { len: symbols.len(), min: ALPHABET_LENGTH_MIN });
    }

    tracing::debug!(count, length, alphabet_len = symbols.len(), "generating passwords");

    let max_symbol_len = symbols.iter().map(|c| c.len_utf8()).max().unwrap_or(1);
    let mut passwords = Vec::with_capacity(count);
    for _ in 0..count {
        let mut password = String::with_capacity(length * max_symbol_len);
        for _ in 0..length {
            password.push(symbols[sample_index(source, symbols.len())?]);
        }
        passwords.push(password);
    }

    Ok(passwords)
}
