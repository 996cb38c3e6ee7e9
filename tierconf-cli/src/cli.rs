//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CheckCommand, ItemsCommand, ResolveCommand};
use clap::{Parser, Subcommand};

/// Command-line tool for resolving layered configuration.
#[derive(Parser)]
#[command(name = "tierconf")]
#[command(version, about = "Resolve and validate layered configuration", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve values from defaults, file, and environment and print them
    Resolve(ResolveCommand),

    /// Resolve and validate values without printing them
    Check(CheckCommand),

    /// List the items declared in a manifest
    Items(ItemsCommand),
}
