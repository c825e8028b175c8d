//! Command line front end for [passgen](https://crates.io/crates/passgen).
//!
//! # Usage
//!
//! ```sh
//! passgen password --count 5 --length 24 --lower --upper --numeric --special
//! passgen passphrase --words 6 --separator ' ' --casing title
//! ```
//!
//! Class flags replace the default alphabet rather than adding to it, so
//! `--special` alone yields passwords made only of special characters.
//!
//! Results are written one per line to stdout. Passphrase words come from
//! `--word-list`, then the `PASSGEN_WORD_LIST` environment variable, then the
//! built-in list. Set `RUST_LOG=debug` to see what was requested on stderr;
//! generated values are never logged.

pub mod alphabet;
pub mod cli;
pub mod error;
pub mod wordlist;

use std::io::Write;

use passgen::{Generator, RandomSource};

pub use alphabet::{CharClasses, build_alphabet};
pub use cli::{Cli, Command, PassphraseArgs, PasswordArgs};
pub use error::Error;
pub use wordlist::{
    WORD_LIST_ENV, WordList, load_word_list, parse_word_list, resolve_word_list,
    word_list_path_from_env,
};

/// Runs a parsed command with `generator`, writing results to `out`.
///
/// Nothing is written unless the whole batch was generated.
pub fn run<S: RandomSource, W: Write>(
    command: &Command,
    generator: &mut Generator<S>,
    out: &mut W,
) -> Result<(), Error> {
    let results = match command {
        Command::Password(args) => {
            let alphabet = build_alphabet(args.alphabet.as_deref(), args.char_classes());
            generator.passwords(args.count, args.length, &alphabet)?
        }
        Command::Passphrase(args) => {
            let word_list =
                resolve_word_list(args.word_list.as_deref(), word_list_path_from_env())?;
            let casing = args.casing.as_str();
            match &word_list {
                WordList::Builtin(words) => {
                    generator.passphrases(args.count, args.words, args.separator, casing, *words)?
                }
                WordList::Loaded { words, .. } => {
                    generator.passphrases(args.count, args.words, args.separator, casing, words)?
                }
            }
        }
    };

    for line in &results {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}
