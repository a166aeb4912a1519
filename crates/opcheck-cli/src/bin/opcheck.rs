#![allow(clippy::print_stderr)]

use clap::Parser;
use std::io::IsTerminal;

use opcheck_cli::args::CliArgs;
use opcheck_cli::{driver, tracing_config};

fn main() {
    // Only installs a subscriber when OPCHECK_LOG or RUST_LOG is set.
    tracing_config::init_tracing();

    // clap exits with status 2 on usage errors.
    let args = CliArgs::parse();
    let color = !args.no_color && std::io::stdout().is_terminal();

    match driver::run(&args, color) {
        Ok(outcome) => {
            if !outcome.output.is_empty() {
                println!("{}", outcome.output);
            }
            std::process::exit(outcome.exit_code);
        }
        Err(err) => {
            eprintln!("opcheck: {err:#}");
            std::process::exit(driver::EXIT_USAGE);
        }
    }
}
