//! Spotlight core library — domain types, catalog loading, rating rule.
//!
//! Public API surface:
//! - [`types`] — newtypes and domain structs
//! - [`error`] — [`CatalogError`]
//! - [`catalog`] — embedded default catalog, file loading, validation
//! - [`rating`] — the star-rating fill rule and its labels
//! - [`format`] — locale-aware thousands grouping for counts

pub mod catalog;
pub mod error;
pub mod format;
pub mod rating;
pub mod types;

pub use error::CatalogError;
pub use types::{Catalog, Instructor, InstructorId, StarState};
