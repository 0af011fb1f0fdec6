//! Section rendering integration tests.

use tempfile::TempDir;

use spotlight_core::catalog;
use spotlight_core::format;
use spotlight_core::types::{Catalog, Instructor, InstructorId};
use spotlight_renderer::{RenderTarget, Renderer, SectionContext, TemplateEngine};

fn make_instructor(id: &str, rating: f64) -> Instructor {
    Instructor {
        id: InstructorId::from(id),
        name: format!("Teacher {id}"),
        title: "CPA".to_string(),
        qualifications: vec!["CPA".to_string(), "MBA".to_string()],
        years_of_teaching: 6,
        teaching_philosophy: "Small steps, compounding results.".to_string(),
        rating,
        total_reviews: 250,
        image: format!("https://example.com/{id}.jpg"),
        specialties: vec!["Audit".to_string()],
        achievements: vec!["Student Choice Award".to_string()],
        students_count: 12500,
    }
}

#[test]
fn one_card_per_catalog_entry_in_catalog_order() {
    let catalog = catalog::load_embedded().unwrap();
    let renderer = Renderer::new().unwrap();
    let html = renderer.render(&catalog, RenderTarget::Fragment).unwrap();

    let card_count = html.matches("<article class=\"instructor-card\"").count();
    assert_eq!(card_count, catalog.instructors.len());

    let mut last_index = 0;
    for instructor in &catalog.instructors {
        let marker = format!("data-instructor=\"{}\"", instructor.id);
        let index = html.find(&marker).unwrap_or_else(|| {
            panic!("card for '{}' missing from rendered output", instructor.id)
        });
        assert!(index > last_index, "'{}' rendered out of catalog order", instructor.id);
        last_index = index;
    }
}

#[test]
fn card_content_carries_catalog_fields() {
    let catalog = catalog::load_embedded().unwrap();
    let renderer = Renderer::new().unwrap();
    let html = renderer.render(&catalog, RenderTarget::Fragment).unwrap();

    assert!(html.contains("Dr. Sarah Johnson"));
    assert!(html.contains("CPA, MBA Finance"));
    assert!(html.contains(
        "Making complex accounting concepts simple through real-world examples and interactive learning."
    ));
    assert!(html.contains("12 years"));
    assert!(html.contains("3,200 students"));
    assert!(html.contains("(847 reviews)"));
    assert!(html.contains("width=\"64\" height=\"64\""));
    assert!(html.contains("Meet Your Instructor"));
}

#[test]
fn star_markup_matches_the_fill_rule() {
    let catalog = Catalog {
        version: 1,
        instructors: vec![make_instructor("fractional", 4.9)],
    };
    let renderer = Renderer::new().unwrap();
    let html = renderer.render(&catalog, RenderTarget::Fragment).unwrap();

    assert_eq!(html.matches("star star-full").count(), 4);
    assert_eq!(html.matches("star star-half").count(), 1);
    assert_eq!(html.matches("star star-empty").count(), 0);
}

#[test]
fn zero_and_five_ratings_render_all_empty_and_all_full() {
    let renderer = Renderer::new().unwrap();

    let zero = Catalog {
        version: 1,
        instructors: vec![make_instructor("zero", 0.0)],
    };
    let html = renderer.render(&zero, RenderTarget::Fragment).unwrap();
    assert_eq!(html.matches("star star-empty").count(), 5);

    let five = Catalog {
        version: 1,
        instructors: vec![make_instructor("five", 5.0)],
    };
    let html = renderer.render(&five, RenderTarget::Fragment).unwrap();
    assert_eq!(html.matches("star star-full").count(), 5);
}

#[test]
fn empty_achievements_render_no_achievement_badges() {
    let mut instructor = make_instructor("modest", 4.0);
    instructor.achievements.clear();
    let with_empty = Catalog {
        version: 1,
        instructors: vec![instructor],
    };
    let renderer = Renderer::new().unwrap();
    let html = renderer.render(&with_empty, RenderTarget::Fragment).unwrap();

    assert!(!html.contains("badge-brand"), "no achievement badges expected");
    // Qualifications and specialties still render.
    assert!(html.contains("badge-outline"));
    assert!(html.contains("badge-secondary"));
}

#[test]
fn stats_band_and_cta_are_literal_content() {
    // An empty catalog still renders the full section scaffolding.
    let renderer = Renderer::new().unwrap();
    let html = renderer
        .render(&Catalog::default(), RenderTarget::Fragment)
        .unwrap();

    assert!(!html.contains("<article class=\"instructor-card\""));
    for figure in ["45+", "4.8", "12,500+", "95%"] {
        assert!(html.contains(figure), "stat figure '{figure}' missing");
    }
    assert!(html.contains("Ready to Learn from the Best?"));
    assert!(html.contains("Browse All Instructors"));
    assert!(html.contains("View Teaching Credentials"));
}

#[test]
fn full_composition_is_idempotent() {
    let catalog = catalog::load_embedded().unwrap();
    let renderer = Renderer::new().unwrap();
    for target in RenderTarget::all() {
        let first = renderer.render(&catalog, *target).unwrap();
        let second = renderer.render(&catalog, *target).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes(), "non-identical output for {target:?}");
    }
}

#[test]
fn locale_option_changes_count_grouping() {
    let catalog = Catalog {
        version: 1,
        instructors: vec![make_instructor("abroad", 4.5)],
    };
    let de_locale = format::parse_locale("de").unwrap();
    let renderer = Renderer::new().unwrap();
    let html = renderer
        .render_with_locale(&catalog, RenderTarget::Fragment, &de_locale)
        .unwrap();
    assert!(html.contains("12.500 students"));
}

#[test]
fn user_template_override_wins() {
    let catalog = catalog::load_embedded().unwrap();
    let ctx = SectionContext::from_catalog(&catalog, &format::DEFAULT_LOCALE);

    let dir = TempDir::new().expect("tempdir");
    let custom = "<!-- custom fragment --><p>{{ cards | length }} instructors</p>\n";
    std::fs::write(dir.path().join("fragment.html.tera"), custom).expect("write override");

    let engine = TemplateEngine::new(Some(dir.path())).expect("engine");
    let html = engine.render(&ctx, RenderTarget::Fragment).expect("render");

    assert!(html.contains("custom fragment"), "custom template not used");
    assert!(html.contains("4 instructors"), "override missing context");
    assert!(!html.contains("instructor-grid"), "embedded template leaked through");
}

#[test]
fn non_tera_files_in_override_dir_are_ignored() {
    let catalog = catalog::load_embedded().unwrap();
    let ctx = SectionContext::from_catalog(&catalog, &format::DEFAULT_LOCALE);

    let dir = TempDir::new().expect("tempdir");
    std::fs::write(dir.path().join("fragment.html"), "not a template").expect("write");

    let engine = TemplateEngine::new(Some(dir.path())).expect("engine");
    let html = engine.render(&ctx, RenderTarget::Fragment).expect("render");
    assert!(html.contains("instructor-grid"), "embedded template must still be used");
}
