use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use passgen::{
    PASSPHRASE_COUNT_DEFAULT, PASSPHRASE_SEPARATOR_DEFAULT, PASSPHRASE_WORD_COUNT_DEFAULT,
    PASSWORD_COUNT_DEFAULT, PASSWORD_LENGTH_DEFAULT,
};

use crate::alphabet::CharClasses;

#[derive(Parser, Debug)]
#[command(name = "passgen")]
#[command(about = "Generate passwords and passphrases")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate random passwords
    Password(PasswordArgs),
    /// Generate random passphrases from a word list
    Passphrase(PassphraseArgs),
}

#[derive(Args, Debug)]
pub struct PasswordArgs {
    /// Number of passwords to generate
    #[arg(short, long, default_value_t = PASSWORD_COUNT_DEFAULT)]
    pub count: usize,

    /// Length of each password, in characters
    #[arg(short, long, default_value_t = PASSWORD_LENGTH_DEFAULT)]
    pub length: usize,

    /// Exact characters to draw from
    #[arg(short, long, conflicts_with_all = ["lower", "upper", "numeric", "special", "ambiguous"])]
    pub alphabet: Option<String>,

    /// Include lowercase letters
    #[arg(long)]
    pub lower: bool,

    /// Include uppercase letters
    #[arg(long)]
    pub upper: bool,

    /// Include digits
    #[arg(long)]
    pub numeric: bool,

    /// Include special characters
    #[arg(long)]
    pub special: bool,

    /// Keep visually ambiguous characters (0 O 1 I l)
    #[arg(long)]
    pub ambiguous: bool,
}

impl PasswordArgs {
    pub fn char_classes(&self) -> CharClasses {
        CharClasses {
            lower: self.lower,
            upper: self.upper,
            numeric: self.numeric,
            special: self.special,
            ambiguous: self.ambiguous,
        }
    }
}

#[derive(Args, Debug)]
pub struct PassphraseArgs {
    /// Number of passphrases to generate
    #[arg(short, long, default_value_t = PASSPHRASE_COUNT_DEFAULT)]
    pub count: usize,

    /// Number of words in each passphrase
    #[arg(short, long, default_value_t = PASSPHRASE_WORD_COUNT_DEFAULT)]
    pub words: usize,

    /// Character placed between words
    #[arg(short, long, default_value_t = PASSPHRASE_SEPARATOR_DEFAULT)]
    pub separator: char,

    /// Word casing: lower, upper, title or as-is
    #[arg(long, default_value = "lower")]
    pub casing: String,

    /// File with one word per line [env: PASSGEN_WORD_LIST]
    #[arg(long)]
    pub word_list: Option<PathBuf>,
}
