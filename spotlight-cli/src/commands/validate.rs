//! `spotlight validate` — fail-fast catalog validation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::commands::load_catalog;

/// Arguments for `spotlight validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to a catalog YAML file (defaults to the embedded catalog).
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

impl ValidateArgs {
    pub fn run(self) -> Result<()> {
        let catalog = load_catalog(self.catalog.as_ref())?;

        let source = self
            .catalog
            .as_ref()
            .map_or_else(|| "embedded catalog".to_string(), |p| format!("'{}'", p.display()));
        println!(
            "{} {source} is valid ({} instructors, catalog v{})",
            "✓".green().bold(),
            catalog.instructors.len(),
            catalog.version,
        );
        Ok(())
    }
}
