//! Errors raised when stored data breaks a domain rule.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The `status` column held something other than pending/shipped/delivered.
    #[error("unknown order status '{0}'")]
    UnknownOrderStatus(String),
}
