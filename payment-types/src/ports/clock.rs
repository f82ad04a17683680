//! Clock port trait.

use chrono::{DateTime, FixedOffset};

/// Source of the current timezone-aware instant.
///
/// Injected alongside the repository so that "current month" and
/// "last N days" queries stay deterministic under test - adapters provide
/// a system-backed clock for real runs and a pinned clock for tests.
pub trait DateTimeProvider: Send + Sync {
    /// Returns the current instant, carrying its UTC offset.
    fn now(&self) -> DateTime<FixedOffset>;
}
