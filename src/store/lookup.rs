//! The two read paths behind the chat menu.
//!
//! Both lookups resolve a user first and then load that user's orders.
//! Orders come back in ascending `order_id`, which is insertion order.

use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};
use diesel::SqliteConnection;
use tracing::debug;

use super::model::{OrderStatusRow, OrderSummaryRow, UserRow};
use super::schema::{orders, users};
use crate::domain::{DomainError, OrderDetails, OrderStatusLine, OrderStatusReport, OrderSummary};
use crate::error::Result;

// Both parameters are bound as TEXT. Column affinity turns a numeric string
// into an integer for the `user_id` comparison.
const FIND_USER_BY_EMAIL_OR_ID: &str =
    "SELECT user_id, name, email FROM Users WHERE email = ? OR user_id = ?";

// The second predicate compares the raw identifier with the order's own id,
// so orders of other users can match.
const FIND_ORDERS_BY_USER_OR_ORDER_ID: &str =
    "SELECT order_id, status FROM Orders WHERE user_id = ? OR order_id = ? ORDER BY order_id";

/// Find the user whose email equals `email` exactly, with all their orders.
///
/// Returns `Ok(None)` when no user has that email. Matching is
/// case-sensitive and the input is not trimmed.
///
/// # Errors
/// Returns an error if a query fails or a stored status is unknown.
pub fn order_details(conn: &mut SqliteConnection, email: &str) -> Result<Option<OrderDetails>> {
    let user: Option<UserRow> = users::table
        .filter(users::email.eq(email))
        .select(UserRow::as_select())
        .first(conn)
        .optional()?;

    let Some(user) = user else {
        debug!(email, "no user for email");
        return Ok(None);
    };

    let rows: Vec<OrderSummaryRow> = orders::table
        .filter(orders::user_id.eq(user.user_id))
        .order(orders::order_id.asc())
        .select(OrderSummaryRow::as_select())
        .load(conn)?;

    let orders = rows
        .into_iter()
        .map(OrderSummary::try_from)
        .collect::<std::result::Result<Vec<_>, DomainError>>()?;

    debug!(user_id = user.user_id, orders = orders.len(), "order details loaded");
    Ok(Some(OrderDetails {
        user: user.into(),
        orders,
    }))
}

/// Find a user by email or by numeric user id, then list order statuses.
///
/// The listed orders are those owned by the resolved user plus any order
/// whose id equals `identifier`, even if it belongs to someone else.
/// Returns `Ok(None)` when no user matches.
///
/// # Errors
/// Returns an error if a query fails or a stored status is unknown.
pub fn order_status(
    conn: &mut SqliteConnection,
    identifier: &str,
) -> Result<Option<OrderStatusReport>> {
    let user: Option<UserRow> = diesel::sql_query(FIND_USER_BY_EMAIL_OR_ID)
        .bind::<Text, _>(identifier)
        .bind::<Text, _>(identifier)
        .get_result(conn)
        .optional()?;

    let Some(user) = user else {
        debug!(identifier, "no user for identifier");
        return Ok(None);
    };

    let rows: Vec<OrderStatusRow> = diesel::sql_query(FIND_ORDERS_BY_USER_OR_ORDER_ID)
        .bind::<Integer, _>(user.user_id)
        .bind::<Text, _>(identifier)
        .load(conn)?;

    let orders = rows
        .into_iter()
        .map(OrderStatusLine::try_from)
        .collect::<std::result::Result<Vec<_>, DomainError>>()?;

    debug!(user_id = user.user_id, orders = orders.len(), "order statuses loaded");
    Ok(Some(OrderStatusReport {
        user: user.into(),
        orders,
    }))
}
