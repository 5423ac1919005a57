use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::config::CatalogPolicy;
use crate::domain::DomainError;

/// One catalog entry.
///
/// Identity (`==`, `Hash`) is the exact `(name, author)` pair. Sorting by
/// name uses [`Book::cmp_by_name`], which ignores case, so two books can sort
/// as equal without being the same entry.
#[derive(Debug, Clone, Serialize)]
pub struct Book {
    name: String,
    page_count: u32,
    author: String,
    publication_date: NaiveDate,
}

impl Book {
    pub fn new(
        name: impl Into<String>,
        page_count: i32,
        author: impl Into<String>,
        publication_date: NaiveDate,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let author = author.into();

        if name.trim().is_empty() {
            return Err(DomainError::InvalidRecord("name must not be empty".into()));
        }
        if author.trim().is_empty() {
            return Err(DomainError::InvalidRecord(format!(
                "author of '{}' must not be empty",
                name
            )));
        }
        let page_count = u32::try_from(page_count).map_err(|_| {
            DomainError::InvalidRecord(format!(
                "page count of '{}' must not be negative (got {})",
                name, page_count
            ))
        })?;

        Ok(Self {
            name,
            page_count,
            author,
            publication_date,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn publication_date(&self) -> NaiveDate {
        self.publication_date
    }

    /// Natural ordering: names compared without regard to case
    pub fn cmp_by_name(&self, other: &Self) -> Ordering {
        cmp_ignore_case(&self.name, &other.name)
    }

    pub fn cmp_by_author(&self, other: &Self) -> Ordering {
        cmp_ignore_case(&self.author, &other.author)
    }

    /// Age in whole years, counting calendar years only. Negative for books
    /// dated after `reference_year`.
    pub fn age_years(&self, reference_year: i32) -> i32 {
        reference_year - self.publication_date.year()
    }

    pub fn is_classic(&self, reference_year: i32, policy: &CatalogPolicy) -> bool {
        self.age_years(reference_year) >= policy.classic_age_years
    }

    pub fn estimated_reading_time(&self, policy: &CatalogPolicy) -> ReadingTime {
        ReadingTime::from_minutes(u64::from(self.page_count) * u64::from(policy.minutes_per_page))
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.author == other.author
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.author.hash(state);
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<25} | {:>4} pages | {:<20} | {}",
            self.name,
            self.page_count,
            self.author,
            self.publication_date.format("%d/%m/%Y")
        )
    }
}

pub(crate) fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Estimated time to read a book, in whole minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ReadingTime {
    total_minutes: u64,
}

impl ReadingTime {
    pub fn from_minutes(total_minutes: u64) -> Self {
        Self { total_minutes }
    }

    pub fn total_minutes(&self) -> u64 {
        self.total_minutes
    }

    pub fn hours(&self) -> u64 {
        self.total_minutes / 60
    }

    pub fn minutes(&self) -> u64 {
        self.total_minutes % 60
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours() == 0 {
            write!(f, "{} minutes", self.minutes())
        } else {
            write!(f, "{} hours {} minutes", self.hours(), self.minutes())
        }
    }
}
