//! `spotlight render` — render the section and write the output files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use spotlight_core::format;
use spotlight_renderer::{SectionContext, TemplateEngine};

use crate::commands::load_catalog;
use crate::TargetArg;

/// Arguments for `spotlight render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Path to a catalog YAML file (defaults to the embedded catalog).
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Output directory.
    #[arg(long, default_value = "site")]
    pub out: PathBuf,

    /// Which outputs to produce.
    #[arg(long, default_value_t = TargetArg::All)]
    pub target: TargetArg,

    /// CLDR locale name used for count grouping (e.g. en, de, fr-CA).
    #[arg(long, default_value = "en")]
    pub locale: String,

    /// Directory of `.tera` template overrides
    /// (defaults to `~/.spotlight/templates` when it exists).
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// Show what would be written without actually writing any files.
    #[arg(long)]
    pub dry_run: bool,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let catalog = load_catalog(self.catalog.as_ref())?;
        let locale = format::parse_locale(&self.locale)
            .with_context(|| format!("invalid --locale '{}'", self.locale))?;

        let template_dir = self.templates.clone().or_else(default_template_dir);
        let engine = TemplateEngine::new(template_dir.as_deref())
            .context("failed to build template engine")?;
        let ctx = SectionContext::from_catalog(&catalog, &locale);

        let mut writes = Vec::new();
        for target in self.target.targets() {
            let content = engine
                .render(&ctx, *target)
                .with_context(|| format!("render failed for {}", target.file_name()))?;
            let path = target.output_path(&self.out);
            let result = atomic_write(&path, &content, self.dry_run)?;
            writes.push(result);
        }

        print_results(&writes, self.dry_run);
        Ok(())
    }
}

/// `~/.spotlight/templates`, if the directory exists.
fn default_template_dir() -> Option<PathBuf> {
    let dir = dirs::home_dir()?.join(".spotlight").join("templates");
    dir.is_dir().then_some(dir)
}

// ---------------------------------------------------------------------------
// Atomic write
// ---------------------------------------------------------------------------

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File was skipped — rendered content matches what is already on disk.
    Unchanged { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

/// Atomically write one rendered file.
///
/// Write flow: normalise line endings to LF → compare against the existing
/// file (skip if identical) → write to a `.tmp` sibling → rename. The `.tmp`
/// sibling keeps the rename on the same filesystem.
fn atomic_write(path: &Path, content: &str, dry_run: bool) -> Result<WriteResult> {
    let normalized = content.replace("\r\n", "\n");
    let content = normalized.as_str();

    if let Ok(existing) = std::fs::read_to_string(path) {
        if existing == content {
            return Ok(WriteResult::Unchanged {
                path: path.to_path_buf(),
            });
        }
    }

    if dry_run {
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }

    let tmp = PathBuf::from(format!("{}.spotlight.tmp", path.display()));
    std::fs::write(&tmp, content)
        .with_context(|| format!("failed to write '{}'", tmp.display()))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("failed to move output into '{}'", path.display()));
    }

    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

fn print_results(writes: &[WriteResult], dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    let written = writes
        .iter()
        .filter(|r| matches!(r, WriteResult::Written { .. } | WriteResult::WouldWrite { .. }))
        .count();
    let unchanged = writes.len() - written;

    println!("{prefix}✓ section rendered ({written} written, {unchanged} unchanged)");
    for r in writes {
        match r {
            WriteResult::Written { path } => println!("  ✎  {}", path.display()),
            WriteResult::WouldWrite { path } => println!("  ~  {}", path.display()),
            WriteResult::Unchanged { path } => println!("  ·  {}", path.display()),
        }
    }
}
