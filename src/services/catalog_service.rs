//! Catalog Service - sorted views and statistics over an in-memory catalog
//!
//! The catalog is populated once and then only read. Every operation is
//! total: an empty catalog yields zero, empty or `None` rather than an error.

use serde::Serialize;
use std::cmp::Ordering;

use crate::config::CatalogPolicy;
use crate::models::Book;

/// Field a sorted view is keyed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive name
    Name,
    PageCount,
    PublicationDate,
    /// Case-insensitive author
    Author,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl SortKey {
    pub fn compare(self, a: &Book, b: &Book) -> Ordering {
        match self {
            SortKey::Name => a.cmp_by_name(b),
            SortKey::PageCount => a.page_count().cmp(&b.page_count()),
            SortKey::PublicationDate => a.publication_date().cmp(&b.publication_date()),
            SortKey::Author => a.cmp_by_author(b),
        }
    }
}

/// Aggregate figures for a catalog
#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats<'a> {
    pub total_books: usize,
    pub total_pages: u64,
    pub average_pages: f64,
    pub shortest: Option<&'a Book>,
    pub longest: Option<&'a Book>,
}

/// De-duplicated book collection held in base order.
///
/// Base order is case-insensitive name, then case-insensitive author, then
/// the exact name and author. Records whose sort keys tie keep that order
/// in every view.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
    policy: CatalogPolicy,
}

impl Catalog {
    pub fn new(books: impl IntoIterator<Item = Book>) -> Self {
        Self::with_policy(books, CatalogPolicy::default())
    }

    /// Build a catalog, keeping the first of any books sharing name and author.
    pub fn with_policy(books: impl IntoIterator<Item = Book>, policy: CatalogPolicy) -> Self {
        let mut unique: Vec<Book> = Vec::new();

        for book in books {
            if !unique.contains(&book) {
                unique.push(book);
            } else {
                tracing::debug!(
                    "Dropping duplicate catalog entry '{}' by {}",
                    book.name(),
                    book.author()
                );
            }
        }

        unique.sort_by(base_order);

        tracing::info!("Catalog built with {} books", unique.len());
        Self {
            books: unique,
            policy,
        }
    }

    pub fn policy(&self) -> &CatalogPolicy {
        &self.policy
    }

    /// All books in base order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Stable sort of the base order by a single key
    pub fn sorted_by(&self, key: SortKey, direction: Direction) -> Vec<&Book> {
        let mut view: Vec<&Book> = self.books.iter().collect();
        match direction {
            Direction::Ascending => view.sort_by(|a, b| key.compare(a, b)),
            Direction::Descending => view.sort_by(|a, b| key.compare(b, a)),
        }
        view
    }

    pub fn sorted_by_name(&self) -> Vec<&Book> {
        self.sorted_by(SortKey::Name, Direction::Ascending)
    }

    pub fn sorted_by_page_count(&self) -> Vec<&Book> {
        self.sorted_by(SortKey::PageCount, Direction::Ascending)
    }

    /// Newest first
    pub fn sorted_by_publication_date(&self) -> Vec<&Book> {
        self.sorted_by(SortKey::PublicationDate, Direction::Descending)
    }

    pub fn sorted_by_author(&self) -> Vec<&Book> {
        self.sorted_by(SortKey::Author, Direction::Ascending)
    }

    pub fn total_books(&self) -> usize {
        self.books.len()
    }

    pub fn total_pages(&self) -> u64 {
        self.books.iter().map(|b| u64::from(b.page_count())).sum()
    }

    pub fn average_pages(&self) -> f64 {
        if self.books.is_empty() {
            return 0.0;
        }
        self.total_pages() as f64 / self.books.len() as f64
    }

    /// First book with the fewest pages
    pub fn shortest_book(&self) -> Option<&Book> {
        self.books.iter().min_by_key(|b| b.page_count())
    }

    /// First book with the most pages
    pub fn longest_book(&self) -> Option<&Book> {
        // max_by_key would return the last of several equal maxima
        self.books
            .iter()
            .reduce(|best, b| if b.page_count() > best.page_count() { b } else { best })
    }

    pub fn stats(&self) -> CatalogStats<'_> {
        CatalogStats {
            total_books: self.total_books(),
            total_pages: self.total_pages(),
            average_pages: self.average_pages(),
            shortest: self.shortest_book(),
            longest: self.longest_book(),
        }
    }

    pub fn classic_books(&self, reference_year: i32) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|b| b.is_classic(reference_year, &self.policy))
            .collect()
    }

    /// Case-sensitive substring match on the author
    pub fn by_author_substring(&self, query: &str) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|b| b.author().contains(query))
            .collect()
    }

    /// Books with at least `min_pages` pages, longest first
    pub fn thick_books(&self, min_pages: u32) -> Vec<&Book> {
        let mut thick: Vec<&Book> = self
            .books
            .iter()
            .filter(|b| b.page_count() >= min_pages)
            .collect();
        thick.sort_by(|a, b| b.page_count().cmp(&a.page_count()));
        thick
    }
}

impl FromIterator<Book> for Catalog {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        Self::new(iter)
    }
}

fn base_order(a: &Book, b: &Book) -> Ordering {
    a.cmp_by_name(b)
        .then_with(|| a.cmp_by_author(b))
        .then_with(|| a.name().cmp(b.name()))
        .then_with(|| a.author().cmp(b.author()))
}
