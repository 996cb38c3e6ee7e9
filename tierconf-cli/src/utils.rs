//! Utility functions for CLI operations.
//!
//! This module holds the pieces shared across commands: global options,
//! the source flags every resolving command accepts, and the standard
//! provider chain built from them.

use crate::error::CliError;
use crate::manifest::Manifest;
use clap::Args;
use std::path::PathBuf;
use tierconf::provider::{DefaultValuesProvider, EnvironmentProvider, YamlFileProvider};
use tierconf::{Item, ItemRegistry, ProviderChain, ResolvedValues, ValidationErrors};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Where configuration values come from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Item manifest declaring the configuration items
    #[arg(long, value_name = "PATH", env = "TIERCONF_ITEMS")]
    pub items: PathBuf,

    /// YAML configuration file (a missing file is not an error)
    #[arg(long, value_name = "PATH", env = "TIERCONF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Do not read environment variables
    #[arg(long)]
    pub no_env: bool,

    /// Ignore configuration file keys no item declares
    #[arg(long)]
    pub lenient: bool,
}

impl SourceArgs {
    /// Build the standard chain: defaults, then the file, then the environment.
    pub fn chain(&self) -> ProviderChain<'static, Item> {
        let file = self.config.as_ref().map(|path| {
            let provider = YamlFileProvider::new(path);
            if self.lenient {
                provider.lenient()
            } else {
                provider
            }
        });

        ProviderChain::new()
            .then(DefaultValuesProvider)
            .then_optional(file)
            .then_optional((!self.no_env).then_some(EnvironmentProvider))
    }

    /// Load the manifest and resolve its items.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest is invalid or a provider fails.
    pub fn resolve(&self) -> Result<(ItemRegistry<Item>, ResolvedValues), CliError> {
        let registry = Manifest::load(&self.items)?.to_registry()?;
        let chain = self.chain();
        log::debug!("resolving {} item(s) through {chain:?}", registry.len());
        let values = chain.resolve(registry.items())?;
        Ok((registry, values))
    }
}

/// Print every validation failure to stderr.
pub fn report_failures(errors: &ValidationErrors) {
    for line in errors.report() {
        eprintln!("{line}");
    }
}
