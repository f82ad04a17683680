//! Repository port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (in-memory, or anything else that can produce the record set)
//! implement this trait.

use crate::domain::Payment;
use crate::error::RepoError;

/// Read-side port for payment records.
///
/// `find_all` returns the complete current record set - no pagination, no
/// filtering at the source. The query service fetches a fresh snapshot on
/// every call and never caches the result.
pub trait PaymentRepository: Send + Sync {
    /// Returns every payment currently known to the record source.
    fn find_all(&self) -> Result<Vec<Payment>, RepoError>;
}
