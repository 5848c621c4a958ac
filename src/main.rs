//! The Hinglish programming language compiler CLI.
//!
//! This binary parses flags, reads the source file, and delegates the
//! transpile/compile/run orchestration to the driver module.

use clap::Parser;

mod diagnostics;
mod driver;

/// Command-line interface for the hpc compiler.
#[derive(Parser)]
#[command(name = "hpc")]
#[command(about = "Hinglish programming language compiler", long_about = None)]
struct Cli {
    /// The source file to compile (e.g., `hello.hp`).
    file: String,

    /// Output path for the executable.
    /// If not specified, uses the input path with its extension stripped.
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Retain the intermediate C file next to the input.
    #[arg(long = "keep-c")]
    keep_c: bool,

    /// Print compilation progress to stderr.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Run the produced executable after a successful compilation.
    /// The exit code mirrors the executed program's.
    #[arg(long = "run")]
    run: bool,
}

/// Entry point for the hpc compiler.
fn main() {
    let cli = Cli::parse();

    let options = driver::Options {
        output: cli.output,
        keep_c: cli.keep_c,
        verbose: cli.verbose,
        run: cli.run,
    };

    match driver::compile(&cli.file, &options) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(error) => {
            diagnostics::report_error(&cli.file, error.source(), error.error());
            std::process::exit(1);
        }
    }
}
