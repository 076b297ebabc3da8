//! Store-agnostic types for users, orders and lookup results.

pub mod error;
pub mod lookup;
pub mod order;
pub mod user;

pub use error::DomainError;
pub use lookup::{OrderDetails, OrderStatusReport};
pub use order::{OrderStatus, OrderStatusLine, OrderSummary};
pub use user::User;
