//! Payment Query Service
//!
//! Stateless query facade over the full payment record set.
//! Contains NO infrastructure logic - every operation fetches a fresh
//! snapshot through the repository port and computes its result eagerly.

use std::collections::HashSet;

use chrono::Duration;
use rust_decimal::Decimal;

use payment_types::{
    DateTimeProvider, Payment, PaymentItem, PaymentRepository, QueryError, YearMonth,
};

/// Direction for the comparator-based sort operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Ascending,
    Descending,
}

/// Query service for payment analytics.
///
/// Generic over `R: PaymentRepository` and `C: DateTimeProvider` - the
/// adapters are injected at compile time. This enables:
/// - Swapping record sources without code changes
/// - Testing with a stub repository and a pinned clock
/// - Compile-time checks for port implementation
///
/// The service holds no other state; calling any query twice against an
/// unchanged record set and clock yields identical results.
pub struct PaymentQueryService<R: PaymentRepository, C: DateTimeProvider> {
    repo: R,
    clock: C,
}

impl<R: PaymentRepository, C: DateTimeProvider> PaymentQueryService<R, C> {
    /// Creates a new query service with the given record source and clock.
    pub fn new(repo: R, clock: C) -> Self {
        Self { repo, clock }
    }

    /// Fetches a fresh snapshot of all records. Never cached.
    fn find_all(&self) -> Result<Vec<Payment>, QueryError> {
        let payments = self.repo.find_all()?;
        tracing::debug!(count = payments.len(), "fetched payment snapshot");
        Ok(payments)
    }

    /// Sorts a fresh snapshot by the given key in the given direction.
    ///
    /// Descending reverses the comparator, not the result; the sort is
    /// stable, so payments with equal keys keep the record source's
    /// original relative order in either direction.
    fn sorted_by<K, F>(&self, direction: Direction, key: F) -> Result<Vec<Payment>, QueryError>
    where
        K: Ord,
        F: Fn(&Payment) -> K,
    {
        let mut payments = self.find_all()?;
        payments.sort_by(|a, b| {
            let ordering = key(a).cmp(&key(b));
            match direction {
                Direction::Ascending => ordering,
                Direction::Descending => ordering.reverse(),
            }
        });
        Ok(payments)
    }

    /// Keeps the payments matching the predicate, in record order.
    fn filtered<P>(&self, predicate: P) -> Result<Vec<Payment>, QueryError>
    where
        P: Fn(&Payment) -> bool,
    {
        Ok(self.find_all()?.into_iter().filter(|p| predicate(p)).collect())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Sorting
    // ─────────────────────────────────────────────────────────────────────────

    /// All payments sorted by payment date, earliest first.
    pub fn sorted_by_date_asc(&self) -> Result<Vec<Payment>, QueryError> {
        self.sorted_by(Direction::Ascending, |p| p.payment_date)
    }

    /// All payments sorted by payment date, latest first.
    pub fn sorted_by_date_desc(&self) -> Result<Vec<Payment>, QueryError> {
        self.sorted_by(Direction::Descending, |p| p.payment_date)
    }

    /// All payments sorted by item count, fewest first.
    pub fn sorted_by_item_count_asc(&self) -> Result<Vec<Payment>, QueryError> {
        self.sorted_by(Direction::Ascending, Payment::item_count)
    }

    /// All payments sorted by item count, most first.
    pub fn sorted_by_item_count_desc(&self) -> Result<Vec<Payment>, QueryError> {
        self.sorted_by(Direction::Descending, Payment::item_count)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Date windows
    // ─────────────────────────────────────────────────────────────────────────

    /// Payments whose date falls in the given calendar year and month,
    /// read in each payment's own recorded offset.
    pub fn for_month(&self, month: YearMonth) -> Result<Vec<Payment>, QueryError> {
        self.filtered(|p| month.contains(&p.payment_date))
    }

    /// Payments for the month the clock currently reports.
    pub fn for_current_month(&self) -> Result<Vec<Payment>, QueryError> {
        // One clock read; year and month must derive from the same instant.
        let current = YearMonth::from(self.clock.now());
        self.for_month(current)
    }

    /// Payments strictly inside the window `(now - days, now)`.
    ///
    /// Both bounds are exclusive: a payment dated exactly `now` or exactly
    /// `now - days` falls outside the window. Negative `days` is rejected.
    pub fn for_last_days(&self, days: i64) -> Result<Vec<Payment>, QueryError> {
        if days < 0 {
            return Err(QueryError::InvalidArgument(format!(
                "days must be non-negative, got {days}"
            )));
        }
        let now = self.clock.now();
        let past = Duration::try_days(days)
            .and_then(|window| now.checked_sub_signed(window))
            .ok_or_else(|| {
                QueryError::InvalidArgument(format!("day window {days} is out of range"))
            })?;
        self.filtered(|p| p.payment_date > past && p.payment_date < now)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Item queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Payments with exactly one line item, deduplicated by value.
    pub fn with_exactly_one_item(&self) -> Result<HashSet<Payment>, QueryError> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|p| p.item_count() == 1)
            .collect())
    }

    /// Distinct names of products sold in the current month.
    pub fn products_sold_in_current_month(&self) -> Result<HashSet<String>, QueryError> {
        Ok(self
            .for_current_month()?
            .into_iter()
            .flat_map(|p| p.items)
            .map(PaymentItem::into_name)
            .collect())
    }

    /// All items bought by the user with the given email address, flattened.
    ///
    /// The match is exact and case-sensitive. Record order and each
    /// payment's internal item order are preserved.
    pub fn items_for_user_email(&self, email: &str) -> Result<Vec<PaymentItem>, QueryError> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|p| p.user.email == email)
            .flat_map(|p| p.items)
            .collect())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Aggregation
    // ─────────────────────────────────────────────────────────────────────────

    /// Exact-decimal sum of total sums over all payments in the given month.
    pub fn total_for_month(&self, month: YearMonth) -> Result<Decimal, QueryError> {
        Ok(self.for_month(month)?.iter().map(Payment::total_sum).sum())
    }

    /// Exact-decimal sum of discounts over all payments in the given month.
    pub fn discount_for_month(&self, month: YearMonth) -> Result<Decimal, QueryError> {
        Ok(self
            .for_month(month)?
            .iter()
            .map(Payment::discount_sum)
            .sum())
    }

    /// Payments whose total sum strictly exceeds the integer threshold,
    /// compared as exact decimals. Deduplicated by value.
    pub fn with_value_over(&self, value: i64) -> Result<HashSet<Payment>, QueryError> {
        let threshold = Decimal::from(value);
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|p| p.total_sum() > threshold)
            .collect())
    }
}
