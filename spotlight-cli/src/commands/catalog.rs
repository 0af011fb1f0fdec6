//! `spotlight catalog` — list the instructor catalog.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use spotlight_core::format;
use spotlight_core::rating;
use spotlight_core::types::Catalog;

use crate::commands::load_catalog;

/// Arguments for `spotlight catalog`.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Path to a catalog YAML file (defaults to the embedded catalog).
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// CLDR locale name used for count grouping.
    #[arg(long, default_value = "en")]
    pub locale: String,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct CatalogReportJson {
    summary: CatalogSummaryJson,
    instructors: Vec<InstructorJson>,
}

#[derive(Serialize)]
struct CatalogSummaryJson {
    version: u32,
    instructors: usize,
}

#[derive(Serialize)]
struct InstructorJson {
    id: String,
    name: String,
    title: String,
    years_of_teaching: u32,
    rating: f64,
    total_reviews: u32,
    students_count: u32,
}

#[derive(Tabled)]
struct CatalogTableRow {
    #[tabled(rename = "id")]
    id: String,
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "title")]
    title: String,
    #[tabled(rename = "years")]
    years: u32,
    #[tabled(rename = "students")]
    students: String,
    #[tabled(rename = "rating")]
    rating: String,
}

impl CatalogArgs {
    pub fn run(self) -> Result<()> {
        let catalog = load_catalog(self.catalog.as_ref())?;
        let locale = format::parse_locale(&self.locale)
            .with_context(|| format!("invalid --locale '{}'", self.locale))?;

        if self.json {
            print_json(&catalog)?;
            return Ok(());
        }

        print_table(&catalog, &locale);
        Ok(())
    }
}

fn print_json(catalog: &Catalog) -> Result<()> {
    let payload = CatalogReportJson {
        summary: CatalogSummaryJson {
            version: catalog.version,
            instructors: catalog.instructors.len(),
        },
        instructors: catalog
            .instructors
            .iter()
            .map(|i| InstructorJson {
                id: i.id.0.clone(),
                name: i.name.clone(),
                title: i.title.clone(),
                years_of_teaching: i.years_of_teaching,
                rating: i.rating,
                total_reviews: i.total_reviews,
                students_count: i.students_count,
            })
            .collect(),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).context("failed to serialize catalog JSON")?
    );
    Ok(())
}

fn print_table(catalog: &Catalog, locale: &format::Locale) {
    println!(
        "Spotlight v{} | catalog v{} | {} instructors",
        env!("CARGO_PKG_VERSION"),
        catalog.version,
        catalog.instructors.len(),
    );

    if catalog.instructors.is_empty() {
        println!("Catalog is empty.");
        return;
    }

    let rows: Vec<CatalogTableRow> = catalog
        .instructors
        .iter()
        .map(|i| CatalogTableRow {
            id: i.id.0.clone(),
            name: i.name.bold().to_string(),
            title: i.title.clone(),
            years: i.years_of_teaching,
            students: format::format_count(i.students_count, locale),
            rating: format!(
                "{} {}",
                rating::rating_label(i.rating),
                rating::reviews_label(i.total_reviews)
            ),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}
