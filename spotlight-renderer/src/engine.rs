//! Tera rendering engine — [`RenderTarget`] enum and [`Renderer`].
//!
//! # Target mapping
//!
//! | Target   | Template             | Output file                |
//! |----------|----------------------|----------------------------|
//! | Page     | `page.html.tera`     | `index.html`               |
//! | Fragment | `fragment.html.tera` | `instructor-spotlight.html`|
//!
//! `Page` wraps the section in a standalone HTML document; `Fragment` emits
//! the bare `<section>` markup for embedding in a host page.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::Tera;

use spotlight_core::format::{Locale, DEFAULT_LOCALE};
use spotlight_core::types::Catalog;

use crate::context::SectionContext;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("page.html.tera", include_str!("templates/page.html.tera")),
    ("fragment.html.tera", include_str!("templates/fragment.html.tera")),
    (
        "partials/card.html.tera",
        include_str!("templates/_partials/card.html.tera"),
    ),
    (
        "partials/stars.html.tera",
        include_str!("templates/_partials/stars.html.tera"),
    ),
    (
        "partials/badges.html.tera",
        include_str!("templates/_partials/badges.html.tera"),
    ),
];

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/").to_lowercase()
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_user_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.exists() {
        return Ok(vec![]);
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    let mut templates = Vec::new();
    for path in files {
        if path.extension().and_then(|s| s.to_str()) != Some("tera") {
            continue;
        }
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        templates.push((name, contents));
    }
    Ok(templates)
}

fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = HashMap::new();
    for (name, content) in TPLS {
        templates.insert(
            normalize_template_name(Path::new(name)),
            (*content).to_string(),
        );
    }
    if let Some(dir) = user_template_dir {
        for (name, content) in load_user_templates(dir)? {
            tracing::debug!("user template override: {name}");
            templates.insert(name, content);
        }
    }

    let mut tera = Tera::default();
    // Catalog text reaches the markup only through escaped expressions.
    tera.autoescape_on(vec![".html.tera"]);
    let items: Vec<(String, String)> = templates.into_iter().collect();
    tera.add_raw_templates(items)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// RenderTarget
// ---------------------------------------------------------------------------

/// The render outputs the section generator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderTarget {
    Page,
    Fragment,
}

impl RenderTarget {
    /// All target variants in a stable order.
    pub fn all() -> &'static [RenderTarget] {
        &[RenderTarget::Page, RenderTarget::Fragment]
    }

    /// Template name rendered for this target.
    pub fn template_name(&self) -> &'static str {
        match self {
            RenderTarget::Page => "page.html.tera",
            RenderTarget::Fragment => "fragment.html.tera",
        }
    }

    /// Output file name for this target.
    pub fn file_name(&self) -> &'static str {
        match self {
            RenderTarget::Page => "index.html",
            RenderTarget::Fragment => "instructor-spotlight.html",
        }
    }

    /// Output path for this target under `out_dir`.
    pub fn output_path(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(self.file_name())
    }
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine for rendering the section with optional user overrides.
///
/// `user_template_dir` may contain `.tera` files that override embedded
/// defaults. Template names are normalised to lowercase relative paths.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Construct a new [`TemplateEngine`], loading embedded templates plus any
    /// overrides found in `user_template_dir`.
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(user_template_dir)?;
        Ok(TemplateEngine { tera })
    }

    /// Render one target from the supplied context.
    pub fn render(
        &self,
        ctx: &SectionContext,
        target: RenderTarget,
    ) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        let content = self.tera.render(target.template_name(), &tera_ctx)?;
        Ok(content)
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Embedded-template renderer for the Instructor Spotlight section.
///
/// Create once with [`Renderer::new`] and reuse; rendering is pure, so
/// repeated calls over an unchanged catalog produce byte-identical output.
pub struct Renderer {
    engine: TemplateEngine,
}

impl Renderer {
    /// Construct a new [`Renderer`] with embedded templates.
    pub fn new() -> Result<Self, RenderError> {
        Ok(Renderer { engine: TemplateEngine::new(None)? })
    }

    /// Render one target from `catalog` with the default locale.
    pub fn render(
        &self,
        catalog: &Catalog,
        target: RenderTarget,
    ) -> Result<String, RenderError> {
        self.render_with_locale(catalog, target, &DEFAULT_LOCALE)
    }

    /// Render one target from `catalog` with an explicit locale.
    pub fn render_with_locale(
        &self,
        catalog: &Catalog,
        target: RenderTarget,
        locale: &Locale,
    ) -> Result<String, RenderError> {
        let ctx = SectionContext::from_catalog(catalog, locale);
        self.render_with_context(&ctx, target)
    }

    /// Render one target from a caller-provided [`SectionContext`].
    pub fn render_with_context(
        &self,
        ctx: &SectionContext,
        target: RenderTarget,
    ) -> Result<String, RenderError> {
        self.engine.render(ctx, target)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use spotlight_core::catalog;

    #[test]
    fn renderer_new_succeeds() {
        Renderer::new().expect("Renderer::new should succeed with embedded templates");
    }

    #[test]
    fn all_targets_render_without_error() {
        let renderer = Renderer::new().unwrap();
        let catalog = catalog::load_embedded().unwrap();
        for target in RenderTarget::all() {
            let content = renderer
                .render(&catalog, *target)
                .unwrap_or_else(|e| panic!("render failed for {target:?}: {e}"));
            assert!(
                content.contains("Instructor Spotlight"),
                "section badge missing for {target:?}"
            );
        }
    }

    #[test]
    fn page_wraps_fragment_in_a_document() {
        let renderer = Renderer::new().unwrap();
        let catalog = catalog::load_embedded().unwrap();
        let page = renderer.render(&catalog, RenderTarget::Page).unwrap();
        let fragment = renderer.render(&catalog, RenderTarget::Fragment).unwrap();
        assert!(page.starts_with("<!doctype html>"));
        assert!(!fragment.contains("<!doctype html>"));
        assert!(page.contains("<section class=\"instructor-spotlight\">"));
        assert!(fragment.contains("<section class=\"instructor-spotlight\">"));
    }

    #[test]
    fn output_paths_are_stable() {
        let out = PathBuf::from("/srv/site");
        assert_eq!(
            RenderTarget::Page.output_path(&out),
            PathBuf::from("/srv/site/index.html")
        );
        assert_eq!(
            RenderTarget::Fragment.output_path(&out),
            PathBuf::from("/srv/site/instructor-spotlight.html")
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let renderer = Renderer::new().unwrap();
        let catalog = catalog::load_embedded().unwrap();
        let first = renderer.render(&catalog, RenderTarget::Page).unwrap();
        let second = renderer.render(&catalog, RenderTarget::Page).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn catalog_text_is_html_escaped() {
        let mut catalog = catalog::load_embedded().unwrap();
        catalog.instructors[0].name = "Dr. <Sarah> & Co".to_string();
        let renderer = Renderer::new().unwrap();
        let fragment = renderer.render(&catalog, RenderTarget::Fragment).unwrap();
        assert!(fragment.contains("Dr. &lt;Sarah&gt; &amp; Co"));
        assert!(!fragment.contains("<Sarah>"));
    }
}
