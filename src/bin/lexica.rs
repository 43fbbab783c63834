//! Lexica CLI binary.

use clap::Parser;
use lexica::cli::{args::LexicaArgs, commands::execute_command};
use std::process;

fn main() {
    let args = LexicaArgs::parse();

    // Map verbosity onto the conventional log filter for anything spawned
    // from here; the CLI itself prints through the output module.
    let log_level = match args.verbosity() {
        0 => Some("error"),
        1 => None,
        2 => Some("info"),
        _ => Some("debug"),
    };
    if let Some(level) = log_level {
        unsafe {
            std::env::set_var("RUST_LOG", level);
        }
    }

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
