//! Text the chat menu writes to its output.

use std::fmt::Display;
use std::io::{self, Write};

use chrono::NaiveDateTime;

use crate::domain::{OrderDetails, OrderStatusReport};

pub const GREETING: &str = "Hi there! How can I help you?";
pub const MENU_ORDER_DETAILS: &str = "1. Get order Details (Enter email)";
pub const MENU_ORDER_STATUS: &str = "2. Get order Status (Enter email or order ID)";

pub const CHOICE_PROMPT: &str = ">> ";
pub const EMAIL_PROMPT: &str = "Enter email: ";
pub const IDENTIFIER_PROMPT: &str = "Enter email or order ID: ";
pub const CONTINUE_PROMPT: &str = "Do you want to perform another query? (yes/no): ";

pub const INVALID_CHOICE: &str = "Invalid choice. Please choose 1 or 2.";
pub const USER_NOT_FOUND: &str = "Invalid credentials: User not found.";
pub const USER_OR_ORDER_NOT_FOUND: &str = "Invalid credentials: User or order not found.";
pub const FAREWELL: &str = "Exiting chatbot.";

/// Placeholder for a column that holds NULL.
const MISSING: &str = "None";

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Print the greeting and the two menu options.
pub fn greeting(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{GREETING}")?;
    writeln!(out, "{MENU_ORDER_DETAILS}")?;
    writeln!(out, "{MENU_ORDER_STATUS}")
}

/// Print a user header followed by one line per order.
pub fn order_details(out: &mut impl Write, details: &OrderDetails) -> io::Result<()> {
    writeln!(out, "User: {} ({})", details.user.name, details.user.email)?;
    writeln!(out, "Orders:")?;
    for order in &details.orders {
        writeln!(
            out,
            "  Order ID: {}, Date: {}, Status: {}",
            order.id,
            date_or_missing(order.placed_at),
            or_missing(order.status)
        )?;
    }
    Ok(())
}

/// Print the user name followed by one status line per order.
pub fn order_status(out: &mut impl Write, report: &OrderStatusReport) -> io::Result<()> {
    writeln!(out, "User: {}", report.user.name)?;
    writeln!(out, "Order Statuses:")?;
    for order in &report.orders {
        writeln!(
            out,
            "  Order ID: {}, Status: {}",
            order.id,
            or_missing(order.status)
        )?;
    }
    Ok(())
}

/// Print an engine error the way every failure is reported to the user.
pub fn error(out: &mut impl Write, err: &impl Display) -> io::Result<()> {
    writeln!(out, "Error: {err}")
}

fn date_or_missing(date: Option<NaiveDateTime>) -> String {
    date.map_or_else(
        || MISSING.to_string(),
        |date| date.format(DATE_FORMAT).to_string(),
    )
}

fn or_missing(value: Option<impl Display>) -> String {
    value.map_or_else(|| MISSING.to_string(), |value| value.to_string())
}
