use std::io;
use std::process::ExitCode;

use clap::Parser;
use passgen::Generator;
use passgen_cli::{Cli, Error, run};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only ever carries generated values.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut generator = Generator::new();
    let mut out = io::stdout().lock();

    match run(&cli.command, &mut generator, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            match e {
                // Same status clap uses for bad arguments.
                Error::Generate(ref g) if g.is_validation() => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}
