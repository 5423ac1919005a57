//! Domain layer - Pure business abstractions
//!
//! Only error types live here; the record model is in `models` and the
//! catalog operations in `services`.

pub mod errors;

pub use errors::DomainError;
