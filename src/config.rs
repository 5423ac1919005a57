use chrono::Datelike;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_CLASSIC_AGE_YEARS: i32 = 50;
pub const DEFAULT_MINUTES_PER_PAGE: u32 = 2;
pub const DEFAULT_THICK_BOOK_PAGES: u32 = 300;
pub const DEFAULT_AUTHOR_QUERY: &str = "George Orwell";

/// Fixed policy constants used by the derived book properties
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogPolicy {
    /// A book at least this many years old counts as a classic
    pub classic_age_years: i32,
    /// Reading speed used for time estimates
    pub minutes_per_page: u32,
}

impl Default for CatalogPolicy {
    fn default() -> Self {
        Self {
            classic_age_years: DEFAULT_CLASSIC_AGE_YEARS,
            minutes_per_page: DEFAULT_MINUTES_PER_PAGE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub classic_age_years: i32,
    pub minutes_per_page: u32,
    pub reference_year: i32,
    pub thick_book_pages: u32,
    pub author_query: String,
    pub catalog_csv: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        let reference_year = env_or("REFERENCE_YEAR", chrono::Local::now().year());

        Self {
            classic_age_years: env_or("CLASSIC_AGE_YEARS", DEFAULT_CLASSIC_AGE_YEARS),
            minutes_per_page: env_or("MINUTES_PER_PAGE", DEFAULT_MINUTES_PER_PAGE),
            reference_year,
            thick_book_pages: env_or("THICK_BOOK_PAGES", DEFAULT_THICK_BOOK_PAGES),
            author_query: env::var("AUTHOR_QUERY")
                .unwrap_or_else(|_| DEFAULT_AUTHOR_QUERY.to_string()),
            catalog_csv: env::var("CATALOG_CSV")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn policy(&self) -> CatalogPolicy {
        CatalogPolicy {
            classic_age_years: self.classic_age_years,
            minutes_per_page: self.minutes_per_page,
        }
    }
}

// Unset falls back silently; a malformed value falls back with a warning.
fn env_or<T: FromStr + std::fmt::Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(
                    "{}",
                    crate::domain::DomainError::Config(format!(
                        "{}={:?} is not valid, using {}",
                        key, raw, default
                    ))
                );
                default
            }
        },
        Err(_) => default,
    }
}
