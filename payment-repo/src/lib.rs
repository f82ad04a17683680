//! # Payment Repo
//!
//! Concrete adapters for the payment query service ports: an in-memory
//! record store implementing `PaymentRepository`, and system/fixed clock
//! implementations of `DateTimeProvider`.

use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, FixedOffset, Local};

use payment_types::{DateTimeProvider, Payment, PaymentRepository, RepoError};

/// Vec-backed record store.
///
/// `find_all` hands out a cloned snapshot per call, so callers can never
/// observe shared mutation between queries.
pub struct InMemoryPaymentRepository {
    payments: Vec<Payment>,
}

impl InMemoryPaymentRepository {
    /// Creates a record store over the given payments.
    pub fn new(payments: Vec<Payment>) -> Self {
        Self { payments }
    }

    /// Creates an empty record store.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl PaymentRepository for InMemoryPaymentRepository {
    fn find_all(&self) -> Result<Vec<Payment>, RepoError> {
        tracing::debug!(count = self.payments.len(), "serving payment snapshot");
        Ok(self.payments.clone())
    }
}

/// Build a record store from a JSON record file.
///
/// The file holds a JSON array of payments, e.g.:
///
/// ```json
/// [
///   {
///     "payment_date": "2023-06-15T10:00:00+00:00",
///     "user": { "name": "Alice", "email": "alice@example.com" },
///     "items": [{ "name": "A", "price": "10.00", "discount": "1.00" }]
///   }
/// ]
/// ```
pub fn load_repo(path: impl AsRef<Path>) -> anyhow::Result<InMemoryPaymentRepository> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read record file {}", path.display()))?;
    let payments: Vec<Payment> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse record file {}", path.display()))?;
    tracing::info!(count = payments.len(), file = %path.display(), "loaded payment records");
    Ok(InMemoryPaymentRepository::new(payments))
}

/// Clock backed by the operating system, carrying the local UTC offset.
pub struct SystemClock;

impl DateTimeProvider for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Clock pinned to a given instant, for deterministic tests and replays.
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    /// Creates a clock that always reports `instant`.
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }
}

impl DateTimeProvider for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}
