//! # Payment Types
//!
//! Domain types and port traits for the payment query service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Payment, PaymentItem, User, YearMonth)
//! - `ports/` - Trait definitions that adapters must implement
//! - `error/` - Domain, repository, and query error types

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Payment, PaymentItem, User, YearMonth};
pub use error::{DomainError, QueryError, RepoError};
pub use ports::{DateTimeProvider, PaymentRepository};
