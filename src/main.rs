//! Huescale - Command-line tool for generating color scales from a seed color

use std::process::ExitCode;

use huescale::cli;

fn main() -> ExitCode {
    cli::run()
}
