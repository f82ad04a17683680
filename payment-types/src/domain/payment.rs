//! Payment domain model.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::user::User;
use crate::error::DomainError;

/// One purchased line item within a payment.
///
/// Price and discount are exact decimals; the constructor guarantees that
/// the price is non-negative and the discount stays within `0..=price`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentItem {
    name: String,
    price: Decimal,
    discount: Decimal,
}

impl PaymentItem {
    /// Creates a new line item.
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        discount: Decimal,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Item name cannot be empty".into(),
            ));
        }
        if price.is_sign_negative() {
            return Err(DomainError::NegativePrice);
        }
        if discount.is_sign_negative() || discount > price {
            return Err(DomainError::DiscountOutOfRange { price, discount });
        }
        Ok(Self {
            name,
            price,
            discount,
        })
    }

    /// Returns the product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consumes the item, returning the product name.
    pub fn into_name(self) -> String {
        self.name
    }

    /// Returns the unit price before discount.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the applied discount.
    pub fn discount(&self) -> Decimal {
        self.discount
    }

    /// Effective charge for this line: price minus discount.
    pub fn net_price(&self) -> Decimal {
        self.price - self.discount
    }
}

/// A recorded payment transaction.
///
/// Payments are immutable once recorded and compare by value: two payments
/// with the same date, user, and items are the same payment. Set-returning
/// queries rely on this, so the derived `Eq`/`Hash` pair is a contract,
/// not a convenience.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Payment {
    /// When the payment was made, in the record's own timezone
    pub payment_date: DateTime<FixedOffset>,
    /// The user who made the payment
    pub user: User,
    /// Purchased line items, in purchase order (may be empty)
    pub items: Vec<PaymentItem>,
}

impl Payment {
    /// Creates a new payment record.
    pub fn new(payment_date: DateTime<FixedOffset>, user: User, items: Vec<PaymentItem>) -> Self {
        Self {
            payment_date,
            user,
            items,
        }
    }

    /// Sum over all items of (price - discount), as an exact decimal.
    pub fn total_sum(&self) -> Decimal {
        self.items.iter().map(PaymentItem::net_price).sum()
    }

    /// Sum over all items of the discount alone, as an exact decimal.
    pub fn discount_sum(&self) -> Decimal {
        self.items.iter().map(PaymentItem::discount).sum()
    }

    /// Number of line items in this payment.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
