//! Items command implementation.
//!
//! Lists the items a manifest declares along with where each can be
//! resolved from.

use crate::error::CliError;
use crate::manifest::{ItemSpec, Manifest};
use crate::utils::GlobalOptions;
use clap::Args;
use std::path::PathBuf;

/// List the items declared in a manifest.
#[derive(Args)]
pub struct ItemsCommand {
    /// Item manifest declaring the configuration items
    #[arg(long, value_name = "PATH", env = "TIERCONF_ITEMS")]
    pub items: PathBuf,
}

impl ItemsCommand {
    /// Execute the items command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let manifest = Manifest::load(&self.items)?;
        // Surface duplicate keys and bad rules here too
        manifest.to_registry()?;

        if !global.quiet {
            println!("KEY\tDEFAULT\tFILE KEY\tENV KEY\tRULE\tDESCRIPTION");
        }
        for spec in &manifest.items {
            println!("{}", format_row(spec));
        }
        Ok(())
    }
}

fn format_row(spec: &ItemSpec) -> String {
    let or_dash = |value: Option<&str>| value.unwrap_or("-").to_string();
    [
        spec.key.clone(),
        or_dash(spec.default.as_deref()),
        or_dash(spec.file_key.as_deref()),
        or_dash(spec.env_key.as_deref()),
        spec.rule
            .as_ref()
            .map_or_else(|| "-".to_string(), ToString::to_string),
        spec.description.clone(),
    ]
    .join("\t")
}
