//! text-to-morse - converts text into a morse code audio file
//!
//! Reads a text file (or stdin), renders it as International Morse code and
//! writes a mono 8000 Hz 16-bit WAV file.

use clap::Parser;
use std::process::ExitCode;

use text_to_morse_cli::cli_args::Cli;
use text_to_morse_cli::{commands, config, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let settings = config::sanitize(cli.wpm, cli.fwpm, cli.tone);
    let result = commands::convert::run(
        &cli.input,
        &cli.output,
        &settings,
        cli.verbose > 0,
        cli.json,
    );

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
