//! # spotlight-renderer
//!
//! Tera-based engine that renders the Instructor Spotlight section from a
//! validated catalog.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use spotlight_core::catalog;
//! use spotlight_renderer::{Renderer, RenderTarget};
//!
//! fn render_all() {
//!     let catalog = catalog::load_embedded().expect("embedded catalog");
//!     if let Ok(renderer) = Renderer::new() {
//!         for target in RenderTarget::all() {
//!             if let Ok(html) = renderer.render(&catalog, *target) {
//!                 println!("{}: {} bytes", target.file_name(), html.len());
//!             }
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::{CardContext, SectionContext};
pub use engine::{RenderTarget, Renderer, TemplateEngine};
pub use error::RenderError;
