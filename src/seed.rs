use chrono::NaiveDate;

use crate::domain::DomainError;
use crate::models::Book;

const DEMO_BOOKS: [(&str, i32, &str, (i32, u32, u32)); 7] = [
    ("The Great Gatsby", 180, "F. Scott Fitzgerald", (1925, 4, 10)),
    ("To Kill a Mockingbird", 324, "Harper Lee", (1960, 7, 11)),
    ("1984", 328, "George Orwell", (1949, 6, 8)),
    ("Pride and Prejudice", 432, "Jane Austen", (1813, 1, 28)),
    ("The Catcher in the Rye", 277, "J.D. Salinger", (1951, 7, 16)),
    ("Animal Farm", 95, "George Orwell", (1945, 8, 17)),
    ("Brave New World", 268, "Aldous Huxley", (1932, 8, 30)),
];

/// The seven-book demo catalog used when no CSV is supplied
pub fn demo_books() -> Result<Vec<Book>, DomainError> {
    DEMO_BOOKS
        .iter()
        .map(|&(name, pages, author, (y, m, d))| {
            let published = NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| {
                DomainError::InvalidRecord(format!("invalid publication date for '{}'", name))
            })?;
            Book::new(name, pages, author, published)
        })
        .collect()
}
