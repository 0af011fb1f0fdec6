//! Catalog loading and fail-fast validation.
//!
//! The default catalog ships embedded in the binary; an alternative YAML file
//! can be loaded from disk. Both paths run the same validation pass before the
//! catalog is handed to any renderer, so the composition functions downstream
//! never see a malformed record.

use std::collections::HashSet;
use std::path::Path;

use crate::error::CatalogError;
use crate::types::{Catalog, Instructor};

/// Default catalog content, baked into the binary at compile time.
pub const EMBEDDED_CATALOG: &str = include_str!("catalog.yaml");

/// Load and validate the embedded default catalog.
pub fn load_embedded() -> Result<Catalog, CatalogError> {
    let catalog: Catalog = serde_yaml::from_str(EMBEDDED_CATALOG)?;
    validate(&catalog)?;
    Ok(catalog)
}

/// Load and validate a catalog from a YAML file.
///
/// Returns `CatalogError::CatalogNotFound` if absent,
/// `CatalogError::Parse` (with path + line context) if malformed YAML,
/// or a validation variant if a record violates the catalog invariants.
pub fn load_from_path(path: &Path) -> Result<Catalog, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::CatalogNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    let catalog: Catalog = serde_yaml::from_str(&contents).map_err(|e| CatalogError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    validate(&catalog)?;
    Ok(catalog)
}

/// Validate catalog invariants. Called once at load; rendering never re-checks.
///
/// Rejected: duplicate ids, ratings outside `[0, 5]`, empty name/title/image.
/// Empty list fields are allowed — they render as empty badge groups.
pub fn validate(catalog: &Catalog) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for instructor in &catalog.instructors {
        if !seen.insert(&instructor.id) {
            return Err(CatalogError::DuplicateId {
                id: instructor.id.clone(),
            });
        }
        validate_instructor(instructor)?;
    }
    Ok(())
}

fn validate_instructor(instructor: &Instructor) -> Result<(), CatalogError> {
    if instructor.id.0.trim().is_empty() {
        return Err(CatalogError::MissingField {
            id: instructor.id.clone(),
            field: "id",
        });
    }
    for (field, value) in [
        ("name", &instructor.name),
        ("title", &instructor.title),
        ("image", &instructor.image),
    ] {
        if value.trim().is_empty() {
            return Err(CatalogError::MissingField {
                id: instructor.id.clone(),
                field,
            });
        }
    }
    if !(0.0..=5.0).contains(&instructor.rating) || instructor.rating.is_nan() {
        return Err(CatalogError::RatingOutOfRange {
            id: instructor.id.clone(),
            rating: instructor.rating,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
