use bibliosort::config::Config;
use bibliosort::report::{build_summary, write_json_report, write_text_report};
use bibliosort::seed;
use bibliosort::services::Catalog;

fn test_config() -> Config {
    Config {
        classic_age_years: 50,
        minutes_per_page: 2,
        reference_year: 2024,
        thick_book_pages: 300,
        author_query: "George Orwell".to_string(),
        catalog_csv: None,
    }
}

fn demo_catalog(config: &Config) -> Catalog {
    Catalog::with_policy(
        seed::demo_books().expect("Demo books should be valid"),
        config.policy(),
    )
}

#[test]
fn test_summary_views() {
    let config = test_config();
    let catalog = demo_catalog(&config);
    let summary = build_summary(&catalog, &config);

    assert_eq!(summary.by_name.len(), 7);
    assert_eq!(summary.classics.len(), 7);
    assert_eq!(summary.by_author_query.len(), 2);
    assert_eq!(summary.thick_books.len(), 3);

    let gatsby = summary
        .reading_times
        .iter()
        .find(|entry| entry.name == "The Great Gatsby")
        .expect("Gatsby should have a reading time");
    assert_eq!(gatsby.label, "6 hours 0 minutes");
}

#[test]
fn test_text_report_sections_in_order() {
    let config = test_config();
    let catalog = demo_catalog(&config);
    let summary = build_summary(&catalog, &config);

    let mut out = Vec::new();
    write_text_report(&summary, &mut out).expect("Write to Vec should succeed");
    let text = String::from_utf8(out).expect("Report should be UTF-8");

    let headings = [
        "BOOKS SORTED BY NAME",
        "BOOKS SORTED BY PAGE COUNT",
        "BOOKS SORTED BY PUBLICATION DATE",
        "BOOKS SORTED BY AUTHOR NAME",
        "LIBRARY STATISTICS",
        "CLASSIC BOOKS ANALYSIS (50+ years old)",
        "ESTIMATED READING TIMES",
        "BOOKS BY GEORGE ORWELL",
        "THICK BOOKS (300+ pages)",
    ];
    let mut last = 0;
    for heading in headings {
        let pos = text[last..]
            .find(heading)
            .unwrap_or_else(|| panic!("Missing or misplaced section: {}", heading));
        last += pos;
    }

    assert!(text.contains("Total Pages: 1904"));
    assert!(text.contains("Average Pages: 272.0"));
    assert!(text.contains("Shortest Book: Animal Farm (95 pages)"));
    assert!(text.contains("Longest Book: Pride and Prejudice (432 pages)"));
    assert!(text.contains("1984 by George Orwell (75 years old)"));
}

#[test]
fn test_text_report_empty_catalog() {
    let config = test_config();
    let catalog = Catalog::new(Vec::new());
    let summary = build_summary(&catalog, &config);

    let mut out = Vec::new();
    write_text_report(&summary, &mut out).expect("Write to Vec should succeed");
    let text = String::from_utf8(out).expect("Report should be UTF-8");

    assert!(text.contains("Total Books: 0"));
    assert!(text.contains("Average Pages: 0.0"));
    assert!(text.contains("Shortest Book: N/A"));
    assert!(text.contains("No classic books found in the library."));
}

#[test]
fn test_json_report() {
    let config = test_config();
    let catalog = demo_catalog(&config);
    let summary = build_summary(&catalog, &config);

    let mut out = Vec::new();
    write_json_report(&summary, &mut out).expect("Write to Vec should succeed");
    let value: serde_json::Value = serde_json::from_slice(&out).expect("Report should be JSON");

    assert_eq!(value["reference_year"], 2024);
    assert_eq!(value["stats"]["total_pages"], 1904);
    assert_eq!(value["stats"]["shortest"]["name"], "Animal Farm");
    assert_eq!(value["stats"]["shortest"]["publication_date"], "1945-08-17");
    assert_eq!(value["thick_books"][0]["page_count"], 432);
    assert_eq!(value["classic_age_years"], 50);
    assert_eq!(value["classics"][0]["age_years"], 75);
}

#[test]
fn test_classic_heading_uses_policy_threshold() {
    let mut config = test_config();
    config.classic_age_years = 80;
    let catalog = demo_catalog(&config);
    let summary = build_summary(&catalog, &config);

    let mut out = Vec::new();
    write_text_report(&summary, &mut out).expect("Write to Vec should succeed");
    let text = String::from_utf8(out).expect("Report should be UTF-8");

    assert!(text.contains("CLASSIC BOOKS ANALYSIS (80+ years old)"));
    // Gatsby (99), Brave New World (92) and Pride and Prejudice (211)
    assert!(text.contains("Found 3 classic book(s):"));
}
