//! animate-css - Command-line tool for the Animate.css preset

use std::process::ExitCode;

use animate_preset::cli;

fn main() -> ExitCode {
    cli::run()
}
