//! Error types for the payment query service.

use rust_decimal::Decimal;

/// Domain-level errors (business rule violations).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Price cannot be negative")]
    NegativePrice,

    #[error("Discount {discount} must be between 0 and the price {price}")]
    DiscountOutOfRange { price: Decimal, discount: Decimal },

    #[error("Month must be between 1 and 12, got {0}")]
    MonthOutOfRange(u32),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Repository-level errors (record retrieval failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Record source error: {0}")]
    Source(String),
}

/// Errors surfaced to callers of the query service.
///
/// Repository failures propagate unchanged; the only error the service
/// raises on its own is `InvalidArgument`.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Repo(#[from] RepoError),
}
