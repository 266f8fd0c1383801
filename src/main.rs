mod agents;
mod cli;
mod error;
mod release;
mod utils;
mod workflow;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = workflow::execute_bump(&cli.path, cli.version_type, cli.verbose) {
        if e.is_expected() {
            println!("{}", e.to_string().red());
        } else {
            println!("{}", format!("An unexpected error occurred: {e}").red());
        }
        process::exit(1);
    }
}
