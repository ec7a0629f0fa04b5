use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use textfilters_core::error::FilterError;
use textfilters_core::reverse::{ReverseMode, ReverseOptions, reverse_stream};

/// Reverse the characters of each line of standard input.
#[derive(Parser, Debug)]
#[command(name = "revlines", version)]
struct Args {
    /// Reverse only odd-numbered lines, reproducing the defect of the
    /// legacy filter this tool replaces
    #[arg(long)]
    odd_lines_only: bool,
}

fn run(args: &Args) -> textfilters_core::Result<()> {
    let options = ReverseOptions {
        mode: if args.odd_lines_only {
            ReverseMode::OddLinesOnly
        } else {
            ReverseMode::EveryLine
        },
    };
    let stdin = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout().lock());
    reverse_stream(stdin, &mut stdout, &options)?;
    stdout.flush().map_err(FilterError::Write)
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("revlines: {e}");
            ExitCode::FAILURE
        }
    }
}
