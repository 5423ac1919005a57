//! Services Layer
//!
//! Pure business logic over the in-memory catalog.

pub mod catalog_service;

// Re-export for convenience
pub use catalog_service::*;
