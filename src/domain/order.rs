//! Order types returned by the lookups.
//!
//! - [`OrderStatus`] - The three states an order can be in
//! - [`OrderSummary`] - One order line of an order-details lookup
//! - [`OrderStatusLine`] - One order line of an order-status lookup

use chrono::NaiveDateTime;
use std::fmt;
use std::str::FromStr;

use super::error::DomainError;

/// Lifecycle state of an order. New orders start out [`OrderStatus::Pending`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    #[default]
    Pending,
    Shipped,
    Delivered,
}

impl OrderStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [OrderStatus; 3] = [Self::Pending, Self::Shipped, Self::Delivered];

    /// The value stored in the `status` column.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::UnknownOrderStatus(s.to_string()))
    }
}

/// An order as shown by the order-details lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub id: i32,
    pub placed_at: Option<NaiveDateTime>,
    pub status: Option<OrderStatus>,
}

/// An order as shown by the order-status lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderStatusLine {
    pub id: i32,
    pub status: Option<OrderStatus>,
}
