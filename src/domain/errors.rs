//! Domain error types
//!
//! These errors cover record validation and catalog loading. Catalog
//! queries themselves never fail.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A record was rejected at construction time
    InvalidRecord(String),
    /// Externally supplied catalog data could not be read
    Import(String),
    /// A configuration value could not be parsed
    Config(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::InvalidRecord(msg) => write!(f, "Invalid record: {}", msg),
            DomainError::Import(msg) => write!(f, "Import error: {}", msg),
            DomainError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
