//! Order lookup trait.

use crate::domain::{OrderDetails, OrderStatusReport};
use crate::error::Result;

/// Read access the chat menu needs.
///
/// `Ok(None)` means nobody matched; `Err` means the store itself failed.
/// The menu reports those two cases differently.
pub trait OrderLookup {
    /// Resolve a user by exact email and list all their orders.
    fn order_details(&mut self, email: &str) -> Result<Option<OrderDetails>>;

    /// Resolve a user by email or user id and list matching order statuses.
    fn order_status(&mut self, identifier: &str) -> Result<Option<OrderStatusReport>>;
}

impl<T: OrderLookup + ?Sized> OrderLookup for &mut T {
    fn order_details(&mut self, email: &str) -> Result<Option<OrderDetails>> {
        (**self).order_details(email)
    }

    fn order_status(&mut self, identifier: &str) -> Result<Option<OrderStatusReport>> {
        (**self).order_status(identifier)
    }
}
