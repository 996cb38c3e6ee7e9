//! Main entry point for the tierconf CLI.
//!
//! Resolves a manifest's configuration items from defaults, a YAML file and
//! the environment:
//! - `resolve`: Print the resolved values
//! - `check`: Validate the resolved values
//! - `items`: List the declared items

mod cli;
mod commands;
mod error;
mod manifest;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = tierconf::init_logger(cli.verbose, cli.quiet);
    let level = logger.level();
    if let Err(e) = logger.install() {
        tierconf::Logger::new(level).warn(&format!("logging unavailable: {e}"));
    }

    let global = GlobalOptions { quiet: cli.quiet };

    // Execute the command
    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Items(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
