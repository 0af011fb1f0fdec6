//! Subcommand implementations.

pub mod catalog;
pub mod render;
pub mod validate;

use std::path::PathBuf;

use anyhow::{Context, Result};

use spotlight_core::catalog as catalog_store;
use spotlight_core::types::Catalog;

/// Load and validate the catalog named by `--catalog`, or the embedded default.
pub(crate) fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    match path {
        Some(p) => catalog_store::load_from_path(p)
            .with_context(|| format!("failed to load catalog from '{}'", p.display())),
        None => catalog_store::load_embedded().context("embedded catalog failed validation"),
    }
}
