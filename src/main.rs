use std::{
    fs,
    io::{self, BufWriter},
    process::ExitCode,
};

use clap::Parser;
use lolcode::{DEFAULT_MAX_CALL_DEPTH, Options, run};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// lolcode runs programs written in a small LOLCODE dialect.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as the program text instead of a file path.
    #[arg(short, long)]
    eval: bool,

    /// Maximum number of nested function calls.
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_depth: usize,

    /// Log interpreter activity to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Path of the program to run, or the program itself with `--eval`.
    contents: String,
}

/// Installs the stderr logger. `--verbose` forces debug output; otherwise
/// `RUST_LOG` decides, falling back to warnings only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("lolcode=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr).with_target(true))
                                  .with(filter)
                                  .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let script = if args.eval {
        args.contents
    } else {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    };

    let options = Options { max_call_depth: args.max_depth };
    let mut input = io::stdin().lock();
    let mut output = BufWriter::new(io::stdout().lock());

    match run(&script, &options, &mut input, &mut output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
