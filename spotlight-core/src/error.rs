//! Error types for spotlight-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::InstructorId;

/// All errors that can arise from catalog loading and validation.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Underlying I/O failure (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML error without file context (embedded catalog, serialization).
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse catalog at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The catalog file did not exist at the expected path.
    #[error("catalog not found at {path}")]
    CatalogNotFound { path: PathBuf },

    /// Two catalog entries share the same id.
    #[error("duplicate instructor id '{id}'")]
    DuplicateId { id: InstructorId },

    /// Rating outside the `[0, 5]` domain.
    #[error("instructor '{id}' has rating {rating} outside [0, 5]")]
    RatingOutOfRange { id: InstructorId, rating: f64 },

    /// A required display field was empty.
    #[error("instructor '{id}' is missing required field '{field}'")]
    MissingField {
        id: InstructorId,
        field: &'static str,
    },

    /// `--locale` named a locale num-format does not know.
    #[error("unknown locale '{name}'")]
    UnknownLocale { name: String },
}
