//! Locale-aware count formatting.
//!
//! Student counts are displayed with thousands grouping ("3,200"). Grouping is
//! locale-sensitive; the locale is a render option selected by CLDR name, with
//! `en` as the default so output stays identical across machines.

use num_format::ToFormattedString;

pub use num_format::Locale;

use crate::error::CatalogError;

/// The locale used when none is requested.
pub const DEFAULT_LOCALE: Locale = Locale::en;

/// Resolve a CLDR locale name ("en", "de", "fr-CA", ...) to a [`Locale`].
pub fn parse_locale(name: &str) -> Result<Locale, CatalogError> {
    Locale::from_name(name).map_err(|_| CatalogError::UnknownLocale {
        name: name.to_owned(),
    })
}

/// Format a count with the locale's thousands grouping.
pub fn format_count(count: u32, locale: &Locale) -> String {
    count.to_formatted_string(locale)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
