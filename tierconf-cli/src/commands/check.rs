//! Command to validate resolved configuration.

use crate::error::CliError;
use crate::utils::{report_failures, GlobalOptions, SourceArgs};
use clap::Args;
use tierconf::validate;

/// Resolve and validate configuration values.
#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub sources: SourceArgs,
}

impl CheckCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (registry, values) = self.sources.resolve()?;

        match validate(registry.items(), &values) {
            Ok(()) => {
                if !global.quiet {
                    println!("Configuration is valid");
                }
                Ok(())
            }
            Err(errors) => {
                report_failures(&errors);
                Err(tierconf::Error::from(errors).into())
            }
        }
    }
}
