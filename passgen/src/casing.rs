use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Case transform applied to every word of a passphrase before joining.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PassphraseCasing {
    #[default]
    Lower = 0,
    Upper = 1,
    Title = 2,
    AsIs = 3,
}

impl PassphraseCasing {
    pub const ALL: [PassphraseCasing; 4] = [Self::Lower, Self::Upper, Self::Title, Self::AsIs];

    pub fn name(self) -> &'static str {
        match self {
            Self::Lower => "lower",
            Self::Upper => "upper",
            Self::Title => "title",
            Self::AsIs => "as-is",
        }
    }

    /// Appends `word` to `out` with this casing applied.
    pub fn push_word(self, word: &str, out: &mut String) {
        match self {
            Self::Lower => out.push_str(&word.to_lowercase()),
            Self::Upper => out.push_str(&word.to_uppercase()),
            Self::Title => {
                let mut chars = word.chars();
                if let Some(first) = chars.next() {
                    out.extend(first.to_uppercase());
                    out.push_str(&chars.as_str().to_lowercase());
                }
            }
            Self::AsIs => out.push_str(word),
        }
    }

    /// Returns `word` with this casing applied.
    pub fn apply(self, word: &str) -> String {
        let mut out = String::with_capacity(word.len());
        self.push_word(word, &mut out);
        out
    }
}

impl fmt::Display for PassphraseCasing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for PassphraseCasing {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| Error::InvalidCasing { value: value.to_string() })
    }
}

impl FromStr for PassphraseCasing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("asis") {
            return Ok(Self::AsIs);
        }
        Self::ALL
            .into_iter()
            .find(|casing| casing.name().eq_ignore_ascii_case(value))
            .ok_or_else(|| Error::InvalidCasing { value: s.to_string() })
    }
}

impl TryFrom<&str> for PassphraseCasing {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
