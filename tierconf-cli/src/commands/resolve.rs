//! Resolve command implementation.
//!
//! This module implements the `resolve` command, which merges defaults,
//! the configuration file and the environment, validates the result, and
//! prints the resolved values.

use crate::error::CliError;
use crate::utils::{report_failures, GlobalOptions, SourceArgs};
use clap::{Args, ValueEnum};
use std::io::Write;
use tierconf::{validate, ResolvedValues};

/// Resolve configuration values and print them.
#[derive(Args)]
pub struct ResolveCommand {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "yaml", ignore_case = true)]
    pub format: OutputFormat,

    /// Print values even if validation fails
    #[arg(long)]
    pub skip_validation: bool,
}

/// Output format for resolved values.
#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// YAML mapping
    Yaml,
    /// JSON object
    Json,
    /// KEY=value lines
    Env,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let (registry, values) = self.sources.resolve()?;

        if !self.skip_validation {
            if let Err(errors) = validate(registry.items(), &values) {
                report_failures(&errors);
                return Err(tierconf::Error::from(errors).into());
            }
        }

        let rendered = render(&values, self.format)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Render resolved values in `format`.
pub fn render(values: &ResolvedValues, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(values.as_map())
            .map_err(|e| CliError::SemanticFailure(format!("failed to render YAML: {e}"))),
        OutputFormat::Json => serde_json::to_string_pretty(values.as_map())
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| CliError::SemanticFailure(format!("failed to render JSON: {e}"))),
        OutputFormat::Env => Ok(values
            .iter()
            .map(|(key, value)| format!("{key}={value}\n"))
            .collect()),
    }
}
