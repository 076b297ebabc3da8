//! Results of the two menu lookups.

use super::order::{OrderStatusLine, OrderSummary};
use super::user::User;

/// A user resolved by email together with all of their orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetails {
    pub user: User,
    pub orders: Vec<OrderSummary>,
}

/// A user resolved by email or id together with the matching orders.
///
/// `orders` holds every order owned by `user` plus any order whose own id
/// equals the raw identifier, so it may contain orders of other users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderStatusReport {
    pub user: User,
    pub orders: Vec<OrderStatusLine>,
}
