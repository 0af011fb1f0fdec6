//! Spotlight — Instructor Spotlight section generator CLI.
//!
//! # Usage
//!
//! ```text
//! spotlight render [--catalog <path>] [--out <dir>] [--target page|fragment|all]
//!                  [--locale <name>] [--templates <dir>] [--dry-run]
//! spotlight validate [--catalog <path>]
//! spotlight catalog [--catalog <path>] [--locale <name>] [--json]
//! ```

mod commands;

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{catalog::CatalogArgs, render::RenderArgs, validate::ValidateArgs};
use spotlight_renderer::RenderTarget;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "spotlight",
    version,
    about = "Render the Instructor Spotlight marketing section from an instructor catalog",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the section and write the output files.
    Render(RenderArgs),

    /// Load and validate a catalog without rendering anything.
    Validate(ValidateArgs),

    /// List the instructor catalog.
    Catalog(CatalogArgs),
}

// ---------------------------------------------------------------------------
// Shared render-target argument — parsed from CLI strings
// ---------------------------------------------------------------------------

/// Thin wrapper so clap can parse render targets, including the `all` alias.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TargetArg {
    Page,
    Fragment,
    #[default]
    All,
}

impl TargetArg {
    /// The concrete targets this argument selects, in render order.
    pub fn targets(self) -> &'static [RenderTarget] {
        match self {
            TargetArg::Page => &[RenderTarget::Page],
            TargetArg::Fragment => &[RenderTarget::Fragment],
            TargetArg::All => RenderTarget::all(),
        }
    }
}

impl FromStr for TargetArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "page" => Ok(TargetArg::Page),
            "fragment" => Ok(TargetArg::Fragment),
            "all" => Ok(TargetArg::All),
            other => Err(format!(
                "unknown render target '{other}'; expected: page, fragment, all"
            )),
        }
    }
}

impl fmt::Display for TargetArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetArg::Page => write!(f, "page"),
            TargetArg::Fragment => write!(f, "fragment"),
            TargetArg::All => write!(f, "all"),
        }
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Render(args) => args.run(),
        Commands::Validate(args) => args.run(),
        Commands::Catalog(args) => args.run(),
    }
}
