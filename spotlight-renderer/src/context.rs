//! Section context — serializable rendering payload built from the catalog.
//!
//! [`CardContext::from_instructor`] is the card composer: one instructor record
//! plus its derived star states become one renderable card description.
//! [`SectionContext::from_catalog`] is the page composer: literal header copy,
//! one card per catalog entry in catalog order, the statistics band, and the
//! closing call-to-action.
//!
//! The statistics figures are independently maintained marketing copy. They
//! are deliberately not derived from the catalog and may drift from its
//! actual aggregates.

use serde::{Deserialize, Serialize};

use spotlight_core::format::{self, Locale};
use spotlight_core::rating;
use spotlight_core::types::{Catalog, Instructor, StarState};

use crate::error::RenderError;

/// Logical avatar size passed through to the markup as width/height hints.
pub const AVATAR_SIZE: u32 = 64;

/// Fixed caption of every card's action control.
pub const CARD_ACTION_LABEL: &str = "Meet Your Instructor";

/// Full rendering payload for the Instructor Spotlight section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionContext {
    /// Literal header block (badge, title, subtitle).
    pub header: HeaderContext,
    /// One card per catalog entry, in catalog order.
    pub cards: Vec<CardContext>,
    /// The four literal statistics figures.
    pub stats: Vec<StatContext>,
    /// Closing call-to-action block.
    pub cta: CtaContext,
    /// Generator info.
    pub meta: MetaContext,
}

/// Literal section header content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderContext {
    pub badge_label: String,
    pub title: String,
    pub subtitle: String,
}

/// One instructor profile card, fully derived and display-ready.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardContext {
    pub id: String,
    pub name: String,
    pub title: String,
    pub image_url: String,
    pub image_width: u32,
    pub image_height: u32,
    pub years_of_teaching: u32,
    /// Students count with locale thousands grouping ("3,200").
    pub students_display: String,
    pub qualifications: Vec<String>,
    pub philosophy: String,
    pub specialties: Vec<String>,
    /// Exactly five star states, most significant first.
    pub stars: Vec<StarState>,
    pub rating_display: String,
    pub reviews_display: String,
    pub achievements: Vec<String>,
    pub action_label: String,
}

/// One metric/label pair in the statistics band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatContext {
    pub value: String,
    pub label: String,
}

/// Closing call-to-action content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CtaContext {
    pub title: String,
    pub body: String,
    pub primary_label: String,
    pub secondary_label: String,
}

/// Generator metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaContext {
    pub version: String,
}

impl CardContext {
    /// Compose a card from one validated instructor record.
    ///
    /// Total and side-effect-free: field values are carried over verbatim,
    /// list order is preserved, and empty lists stay empty rather than fail.
    pub fn from_instructor(instructor: &Instructor, locale: &Locale) -> Self {
        CardContext {
            id: instructor.id.0.clone(),
            name: instructor.name.clone(),
            title: instructor.title.clone(),
            image_url: instructor.image.clone(),
            image_width: AVATAR_SIZE,
            image_height: AVATAR_SIZE,
            years_of_teaching: instructor.years_of_teaching,
            students_display: format::format_count(instructor.students_count, locale),
            qualifications: instructor.qualifications.clone(),
            philosophy: instructor.teaching_philosophy.clone(),
            specialties: instructor.specialties.clone(),
            stars: rating::star_states(instructor.rating).to_vec(),
            rating_display: rating::rating_label(instructor.rating),
            reviews_display: rating::reviews_label(instructor.total_reviews),
            achievements: instructor.achievements.clone(),
            action_label: CARD_ACTION_LABEL.to_string(),
        }
    }
}

impl SectionContext {
    /// Compose the full section from a validated catalog.
    pub fn from_catalog(catalog: &Catalog, locale: &Locale) -> Self {
        let cards = catalog
            .instructors
            .iter()
            .map(|instructor| CardContext::from_instructor(instructor, locale))
            .collect();

        SectionContext {
            header: HeaderContext {
                badge_label: "Instructor Spotlight".to_string(),
                title: "Learn from Industry-Leading Experts".to_string(),
                subtitle: "Our instructors combine deep academic knowledge with \
                           real-world experience to provide you with the highest \
                           quality education and practical insights."
                    .to_string(),
            },
            cards,
            stats: vec![
                StatContext {
                    value: "45+".to_string(),
                    label: "Expert Instructors".to_string(),
                },
                StatContext {
                    value: "4.8".to_string(),
                    label: "Average Rating".to_string(),
                },
                StatContext {
                    value: "12,500+".to_string(),
                    label: "Students Taught".to_string(),
                },
                StatContext {
                    value: "95%".to_string(),
                    label: "Pass Rate".to_string(),
                },
            ],
            cta: CtaContext {
                title: "Ready to Learn from the Best?".to_string(),
                body: "Join thousands of students who have achieved their \
                       certification goals with our expert instructors."
                    .to_string(),
                primary_label: "Browse All Instructors".to_string(),
                secondary_label: "View Teaching Credentials".to_string(),
            },
            meta: MetaContext {
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
