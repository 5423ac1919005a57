//! Environment-driven configuration tests. These mutate process
//! environment variables, so they run serially.

use bibliosort::config::{CatalogPolicy, Config};
use serial_test::serial;
use std::path::PathBuf;

const KEYS: [&str; 6] = [
    "CLASSIC_AGE_YEARS",
    "MINUTES_PER_PAGE",
    "REFERENCE_YEAR",
    "THICK_BOOK_PAGES",
    "AUTHOR_QUERY",
    "CATALOG_CSV",
];

fn clear_env() {
    for key in KEYS {
        unsafe { std::env::remove_var(key) };
    }
}

fn set_env(key: &str, value: &str) {
    unsafe { std::env::set_var(key, value) };
}

#[test]
#[serial]
fn test_defaults() {
    clear_env();
    let config = Config::from_env();

    assert_eq!(config.policy(), CatalogPolicy::default());
    assert_eq!(config.classic_age_years, 50);
    assert_eq!(config.minutes_per_page, 2);
    assert_eq!(config.thick_book_pages, 300);
    assert_eq!(config.author_query, "George Orwell");
    assert!(config.catalog_csv.is_none());
    assert!(config.reference_year >= 2024);
}

#[test]
#[serial]
fn test_overrides() {
    clear_env();
    set_env("CLASSIC_AGE_YEARS", "25");
    set_env("MINUTES_PER_PAGE", "3");
    set_env("REFERENCE_YEAR", "2000");
    set_env("THICK_BOOK_PAGES", "400");
    set_env("AUTHOR_QUERY", "Austen");
    set_env("CATALOG_CSV", "books.csv");

    let config = Config::from_env();
    clear_env();

    assert_eq!(
        config.policy(),
        CatalogPolicy {
            classic_age_years: 25,
            minutes_per_page: 3,
        }
    );
    assert_eq!(config.reference_year, 2000);
    assert_eq!(config.thick_book_pages, 400);
    assert_eq!(config.author_query, "Austen");
    assert_eq!(config.catalog_csv, Some(PathBuf::from("books.csv")));
}

#[test]
#[serial]
fn test_malformed_values_fall_back() {
    clear_env();
    set_env("MINUTES_PER_PAGE", "fast");
    set_env("THICK_BOOK_PAGES", "-1");
    set_env("CATALOG_CSV", "  ");

    let config = Config::from_env();
    clear_env();

    assert_eq!(config.minutes_per_page, 2);
    assert_eq!(config.thick_book_pages, 300);
    assert!(config.catalog_csv.is_none());
}
