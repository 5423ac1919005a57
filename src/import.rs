use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;

use crate::domain::DomainError;
use crate::models::Book;

#[derive(Debug, Deserialize)]
struct CatalogRow {
    name: String,
    pages: i32,
    author: String,
    /// ISO date, e.g. 1949-06-08
    published: NaiveDate,
}

/// Parse a headered `name,pages,author,published` CSV into validated books.
pub fn parse_catalog_csv(content: &[u8]) -> Result<Vec<Book>, DomainError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content);

    let mut books = Vec::new();

    for (index, result) in rdr.deserialize().enumerate() {
        let row_number = index + 1;
        let record: CatalogRow = result
            .map_err(|e| DomainError::Import(format!("row {}: {}", row_number, e)))?;

        let book = Book::new(record.name, record.pages, record.author, record.published)
            .map_err(|e| DomainError::Import(format!("row {}: {}", row_number, e)))?;
        books.push(book);
    }

    tracing::info!("Parsed {} books from CSV", books.len());
    Ok(books)
}

pub fn load_catalog_csv(path: &Path) -> Result<Vec<Book>, DomainError> {
    tracing::info!("Loading catalog from {:?}", path);
    let content = std::fs::read(path)
        .map_err(|e| DomainError::Import(format!("{}: {}", path.display(), e)))?;
    parse_catalog_csv(&content)
}
