//! Database row types for Diesel ORM.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::{categories, order_items, orders, products, users};
use crate::domain::{DomainError, OrderStatus, OrderStatusLine, OrderSummary, User};

/// Database row for a user.
///
/// Also loadable by name so the raw email-or-id query can produce it.
#[derive(Queryable, Selectable, QueryableByName, Debug, Clone)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserRow {
    pub user_id: i32,
    pub name: String,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(row.user_id, row.name, row.email)
    }
}

/// Database row for a user (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

/// Database row for a product (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub price: f64,
    pub stock_quantity: i32,
}

/// Database row for an order (insertable).
///
/// `order_date` is left to the column default.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = orders)]
pub struct NewOrder<'a> {
    pub user_id: i32,
    pub status: &'a str,
}

/// Database row for an order item (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = order_items)]
pub struct NewOrderItem {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: f64,
}

/// Database row for a category (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = categories)]
pub struct NewCategory<'a> {
    pub category_name: &'a str,
}

/// Order columns shown by the order-details lookup.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrderSummaryRow {
    pub order_id: i32,
    pub order_date: Option<NaiveDateTime>,
    pub status: Option<String>,
}

impl TryFrom<OrderSummaryRow> for OrderSummary {
    type Error = DomainError;

    fn try_from(row: OrderSummaryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.order_id,
            placed_at: row.order_date,
            status: parse_status(row.status)?,
        })
    }
}

/// Order columns shown by the order-status lookup.
#[derive(QueryableByName, Debug, Clone)]
#[diesel(table_name = orders)]
pub struct OrderStatusRow {
    pub order_id: i32,
    pub status: Option<String>,
}

impl TryFrom<OrderStatusRow> for OrderStatusLine {
    type Error = DomainError;

    fn try_from(row: OrderStatusRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.order_id,
            status: parse_status(row.status)?,
        })
    }
}

fn parse_status(raw: Option<String>) -> Result<Option<OrderStatus>, DomainError> {
    raw.as_deref().map(str::parse).transpose()
}
