//! kwonly CLI entry point

use clap::Parser;
use kwonly::cli::args::Cli;
use std::process;

fn main() {
    let cli = Cli::parse();
    let exit_code = kwonly::cli::check::run_check(&cli);
    process::exit(exit_code);
}
