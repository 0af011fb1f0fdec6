//! Domain types for the Spotlight catalog.
//!
//! All types are serializable/deserializable via serde + serde_yaml. The
//! catalog is immutable after load; nothing here exposes mutation.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed, stable identifier for an instructor in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstructorId(pub String);

impl fmt::Display for InstructorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for InstructorId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for InstructorId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Discrete fill level of a single star glyph in a rating display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarState {
    Full,
    Half,
    Empty,
}

impl fmt::Display for StarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StarState::Full => write!(f, "full"),
            StarState::Half => write!(f, "half"),
            StarState::Empty => write!(f, "empty"),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// One instructor profile in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: InstructorId,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub qualifications: Vec<String>,
    pub years_of_teaching: u32,
    pub teaching_philosophy: String,
    /// Rating in `[0, 5]`; validated at catalog load.
    pub rating: f64,
    pub total_reviews: u32,
    /// Image URL, passed through to the rendered markup unmodified.
    pub image: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    pub students_count: u32,
}

/// Root of the Spotlight YAML catalog. Catalog order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Catalog {
    pub version: u32,
    #[serde(default)]
    pub instructors: Vec<Instructor>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newtype_display() {
        assert_eq!(InstructorId::from("sarah-johnson").to_string(), "sarah-johnson");
    }

    #[test]
    fn newtype_equality() {
        let a = InstructorId::from("x");
        let b = InstructorId::from(String::from("x"));
        assert_eq!(a, b);
    }

    #[test]
    fn star_state_serializes_lowercase() {
        assert_eq!(serde_yaml::to_string(&StarState::Half).unwrap().trim(), "half");
        assert_eq!(StarState::Full.to_string(), "full");
    }

    #[test]
    fn catalog_serde_roundtrip() {
        let catalog = Catalog {
            version: 1,
            instructors: vec![Instructor {
                id: InstructorId::from("jane-doe"),
                name: "Jane Doe".to_string(),
                title: "CPA".to_string(),
                qualifications: vec!["CPA".to_string()],
                years_of_teaching: 7,
                teaching_philosophy: "Practice over theory.".to_string(),
                rating: 4.5,
                total_reviews: 120,
                image: "https://example.com/jane.jpg".to_string(),
                specialties: vec!["Audit".to_string()],
                achievements: vec![],
                students_count: 900,
            }],
        };
        let yaml = serde_yaml::to_string(&catalog).expect("serialize");
        let deserialized: Catalog = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(catalog, deserialized);
    }

    #[test]
    fn missing_list_fields_default_to_empty() {
        let yaml = "\
id: solo
name: Solo Teacher
title: EA
years_of_teaching: 3
teaching_philosophy: Keep it simple.
rating: 4.0
total_reviews: 10
image: https://example.com/solo.jpg
students_count: 50
";
        let instructor: Instructor = serde_yaml::from_str(yaml).expect("deserialize");
        assert!(instructor.qualifications.is_empty());
        assert!(instructor.specialties.is_empty());
        assert!(instructor.achievements.is_empty());
    }
}
