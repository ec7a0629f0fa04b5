use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use textfilters_core::error::FilterError;
use textfilters_core::factorial::factorial;
use textfilters_core::parse::extract_integer;

/// Print the factorial of an integer.
///
/// Results are computed with wrapping 64-bit arithmetic: exact through 20!,
/// silently wrapped beyond that.
#[derive(Parser, Debug)]
#[command(name = "fact", version)]
struct Args {
    /// Value to compute the factorial of; read from standard input when
    /// omitted
    #[arg(allow_negative_numbers = true)]
    n: Option<i64>,
}

fn run(args: &Args) -> textfilters_core::Result<()> {
    let n = match args.n {
        Some(n) => Some(n),
        None => {
            let mut input = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut input)
                .map_err(FilterError::Read)?;
            extract_integer(&input)
        }
    };
    // Absent or unparsable input is a silent success, like the original.
    if let Some(n) = n {
        writeln!(io::stdout(), "{}", factorial(n)).map_err(FilterError::Write)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("fact: {e}");
            ExitCode::FAILURE
        }
    }
}
