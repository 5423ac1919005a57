//! Console and JSON reporting over already-computed catalog views
//!
//! `build_summary` runs every catalog query once; the writers below only
//! render what it returns.

use serde::Serialize;
use std::io::{self, Write};

use crate::config::Config;
use crate::models::{Book, ReadingTime};
use crate::services::{Catalog, CatalogStats};

const RULE: &str =
    "================================================================================";
const SECTION_RULE: &str =
    "--------------------------------------------------------------------------------";

#[derive(Debug, Serialize)]
pub struct ClassicEntry<'a> {
    pub book: &'a Book,
    pub age_years: i32,
}

#[derive(Debug, Serialize)]
pub struct ReadingTimeEntry<'a> {
    pub name: &'a str,
    pub reading_time: ReadingTime,
    pub label: String,
}

/// Every view the report prints, in print order
#[derive(Debug, Serialize)]
pub struct CatalogSummary<'a> {
    pub reference_year: i32,
    pub by_name: Vec<&'a Book>,
    pub by_page_count: Vec<&'a Book>,
    pub by_publication_date: Vec<&'a Book>,
    pub by_author: Vec<&'a Book>,
    pub stats: CatalogStats<'a>,
    pub classic_age_years: i32,
    pub classics: Vec<ClassicEntry<'a>>,
    pub reading_times: Vec<ReadingTimeEntry<'a>>,
    pub author_query: &'a str,
    pub by_author_query: Vec<&'a Book>,
    pub thick_book_pages: u32,
    pub thick_books: Vec<&'a Book>,
}

pub fn build_summary<'a>(catalog: &'a Catalog, config: &'a Config) -> CatalogSummary<'a> {
    let policy = catalog.policy();

    let classics = catalog
        .classic_books(config.reference_year)
        .into_iter()
        .map(|book| ClassicEntry {
            book,
            age_years: book.age_years(config.reference_year),
        })
        .collect();

    let reading_times = catalog
        .books()
        .iter()
        .map(|book| {
            let reading_time = book.estimated_reading_time(policy);
            ReadingTimeEntry {
                name: book.name(),
                reading_time,
                label: reading_time.to_string(),
            }
        })
        .collect();

    CatalogSummary {
        reference_year: config.reference_year,
        by_name: catalog.sorted_by_name(),
        by_page_count: catalog.sorted_by_page_count(),
        by_publication_date: catalog.sorted_by_publication_date(),
        by_author: catalog.sorted_by_author(),
        stats: catalog.stats(),
        classic_age_years: policy.classic_age_years,
        classics,
        reading_times,
        author_query: &config.author_query,
        by_author_query: catalog.by_author_substring(&config.author_query),
        thick_book_pages: config.thick_book_pages,
        thick_books: catalog.thick_books(config.thick_book_pages),
    }
}

pub fn write_text_report<W: Write>(summary: &CatalogSummary<'_>, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "📖 BOOK LIBRARY MANAGEMENT SYSTEM 📖")?;
    writeln!(out, "{}", RULE)?;

    write_book_section(out, "🔤 BOOKS SORTED BY NAME (A-Z):", &summary.by_name)?;
    write_book_section(
        out,
        "📄 BOOKS SORTED BY PAGE COUNT (Ascending):",
        &summary.by_page_count,
    )?;
    write_book_section(
        out,
        "📅 BOOKS SORTED BY PUBLICATION DATE (Newest First):",
        &summary.by_publication_date,
    )?;
    write_book_section(out, "✍️  BOOKS SORTED BY AUTHOR NAME:", &summary.by_author)?;

    write_heading(out, "📊 LIBRARY STATISTICS:")?;
    let stats = &summary.stats;
    writeln!(out, "📚 Total Books: {}", stats.total_books)?;
    writeln!(out, "📄 Total Pages: {}", stats.total_pages)?;
    writeln!(out, "📊 Average Pages: {:.1}", stats.average_pages)?;
    writeln!(out, "📘 Shortest Book: {}", extreme_label(stats.shortest))?;
    writeln!(out, "📗 Longest Book: {}", extreme_label(stats.longest))?;

    write_heading(
        out,
        &format!(
            "📜 CLASSIC BOOKS ANALYSIS ({}+ years old):",
            summary.classic_age_years
        ),
    )?;
    if summary.classics.is_empty() {
        writeln!(out, "No classic books found in the library.")?;
    } else {
        writeln!(out, "Found {} classic book(s):", summary.classics.len())?;
        for entry in &summary.classics {
            writeln!(
                out,
                "📜 {} by {} ({} years old)",
                entry.book.name(),
                entry.book.author(),
                entry.age_years
            )?;
        }
    }

    write_heading(out, "⏰ ESTIMATED READING TIMES:")?;
    for entry in &summary.reading_times {
        writeln!(out, "📖 {:<25}: {}", entry.name, entry.label)?;
    }

    write_book_section(
        out,
        &format!("🔍 BOOKS BY {}:", summary.author_query.to_uppercase()),
        &summary.by_author_query,
    )?;
    write_book_section(
        out,
        &format!("📚 THICK BOOKS ({}+ pages):", summary.thick_book_pages),
        &summary.thick_books,
    )?;

    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    Ok(())
}

pub fn write_json_report<W: Write>(summary: &CatalogSummary<'_>, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, summary)?;
    writeln!(out)
}

fn write_heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", SECTION_RULE)
}

fn write_book_section<W: Write>(out: &mut W, title: &str, books: &[&Book]) -> io::Result<()> {
    write_heading(out, title)?;
    for book in books {
        writeln!(out, "📚 {}", book)?;
    }
    Ok(())
}

fn extreme_label(book: Option<&Book>) -> String {
    match book {
        Some(b) => format!("{} ({} pages)", b.name(), b.page_count()),
        None => "N/A (0 pages)".to_string(),
    }
}
