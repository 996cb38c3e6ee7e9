//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Resolve values and print them
//! - `check`: Resolve and validate values
//! - `items`: List declared items

pub mod check;
pub mod items;
pub mod resolve;

pub use check::CheckCommand;
pub use items::ItemsCommand;
pub use resolve::ResolveCommand;
