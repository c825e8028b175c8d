use passgen::{
    ALPHABET_DEFAULT, ALPHABET_LOWER, ALPHABET_LOWER_AMBIGUOUS, ALPHABET_NUMERIC,
    ALPHABET_NUMERIC_AMBIGUOUS, ALPHABET_SPECIAL, ALPHABET_UPPER, ALPHABET_UPPER_AMBIGUOUS,
};

/// Character classes picked on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharClasses {
    pub lower: bool,
    pub upper: bool,
    pub numeric: bool,
    pub special: bool,
    /// Use the variants that keep `0 O 1 I l`.
    pub ambiguous: bool,
}

impl CharClasses {
    #[inline]
    fn any_selected(&self) -> bool {
        self.lower || self.upper || self.numeric || self.special
    }
}

/// Resolves the alphabet to generate from.
///
/// An explicit alphabet wins. Otherwise the selected classes are concatenated
/// in a fixed order; with no class selected the default alphabet is used,
/// unless `--ambiguous` was given on its own, which selects the ambiguous
/// variants of the default classes.
pub fn build_alphabet(explicit: Option<&str>, classes: CharClasses) -> String {
    if let Some(alphabet) = explicit {
        return alphabet.to_string();
    }

    if !classes.any_selected() {
        if !classes.ambiguous {
            return ALPHABET_DEFAULT.to_string();
        }
        return build_alphabet(
            None,
            CharClasses { lower: true, upper: true, numeric: true, ..classes },
        );
    }

    let pick = |plain: &'static str, ambiguous: &'static str| {
        if classes.ambiguous { ambiguous } else { plain }
    };

    let mut alphabet = String::new();
    if classes.lower {
        alphabet.push_str(pick(ALPHABET_LOWER, ALPHABET_LOWER_AMBIGUOUS));
    }
    if classes.upper {
        alphabet.push_str(pick(ALPHABET_UPPER, ALPHABET_UPPER_AMBIGUOUS));
    }
    if classes.numeric {
        alphabet.push_str(pick(ALPHABET_NUMERIC, ALPHABET_NUMERIC_AMBIGUOUS));
    }
    if classes.special {
        alphabet.push_str(ALPHABET_SPECIAL);
    }

    alphabet
}
