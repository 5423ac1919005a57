pub mod config;
pub mod domain;
pub mod import;
pub mod models;
pub mod report;
pub mod seed;
pub mod services;

pub use domain::DomainError;
pub use models::Book;
pub use services::Catalog;
