use crate::casing::PassphraseCasing;
use crate::error::{Error, Result};
use crate::sampler::sample_index;
use crate::source::RandomSource;
use crate::{
    PASSPHRASE_COUNT_MAX, PASSPHRASE_COUNT_MIN, PASSPHRASE_WORD_COUNT_MAX,
    PASSPHRASE_WORD_COUNT_MIN, WORD_LIST_LENGTH_MIN,
};

/// Builds `count` passphrases of `word_count` words from `word_list`.
///
/// Words are drawn with replacement, so a phrase may repeat a word. Checks run
/// in order: count, word count, casing, word list, all before the source is read.
pub(crate) fn assemble_passphrases<S, C, W>(
    source: &mut S,
    count: usize,
    word_count: usize,
    separator: char,
    casing: C,
    word_list: &[W],
) -> Result<Vec<String>>
where
    S: RandomSource + ?Sized,
    C: TryInto<PassphraseCasing>,
    Error: From<C::Error>,
    W: AsRef<str>,
{
    if !(PASSPHRASE_COUNT_MIN..=PASSPHRASE_COUNT_MAX).contains(&count) {
        return Err(Error::InvalidCount {
            count,
            min: PASSPHRASE_COUNT_MIN,
            max: PASSPHRASE_COUNT_MAX,
        });
    }
    if !(PASSPHRASE_WORD_COUNT_MIN..=PASSPHRASE_WORD_COUNT_MAX).contains(&word_count) {
        return Err(Error::InvalidWordCount {
            word_count,
            min: PASSPHRASE_WORD_COUNT_MIN,
            max: PASSPHRASE_WORD_COUNT_MAX,
        });
    }
    let casing: PassphraseCasing = casing.try_into()?;
    // An empty entry would silently shorten a phrase by one word.
    let empty = word_list.iter().filter(|w| w.as_ref().is_empty()).count();
    if word_list.len() < WORD_LIST_LENGTH_MIN || empty > 0 {
        return Err(Error::InvalidWordList {
            len: word_list.len(),
            min: WORD_LIST_LENGTH_MIN,
            empty,
        });
    }

    tracing::debug!(
        count,
        word_count,
        %casing,
        word_list_len = word_list.len(),
        "generating passphrases"
    );

    let mut passphrases = Vec::with_capacity(count);
    for _ in 0..count {
        let mut phrase = String::new();
        for i in 0..word_count {
            if i > 0 {
                phrase.push(separator);
            }
            let word = word_list[sample_index(source, word_list.len())?].as_ref();
            casing.push_word(word, &mut phrase);
        }
        passphrases.push(phrase);
    }

    Ok(passphrases)
}
