use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use textfilters_core::error::FilterError;
use textfilters_core::tokens::{TokenCountOptions, count_tokens};

/// Count whitespace-delimited words on standard input.
#[derive(Parser, Debug)]
#[command(name = "countwords", version)]
struct Args {
    /// Leave every occurrence of WORD out of the count (repeatable);
    /// `--exclude a` reproduces the defect of the legacy counter
    #[arg(long, value_name = "WORD")]
    exclude: Vec<String>,
}

fn run(args: &Args) -> textfilters_core::Result<()> {
    let options = TokenCountOptions {
        exclude: args.exclude.clone(),
    };
    let count = count_tokens(io::stdin().lock(), &options)?;
    writeln!(io::stdout(), "{count}").map_err(FilterError::Write)
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("countwords: {e}");
            ExitCode::FAILURE
        }
    }
}
