//! Orderdesk - an interactive order-lookup desk over SQLite.
//!
//! The crate provisions a single-file SQLite store with a small e-commerce
//! schema (users, products, orders, order items, categories), seeds it with
//! sample rows, and answers two questions from a text menu: what orders a
//! user has, and what state those orders are in.
//!
//! # Modules
//!
//! - [`config`] - Optional TOML configuration with environment and CLI overrides
//! - [`domain`] - Users, orders and lookup results, independent of storage
//! - [`port`] - The [`port::OrderLookup`] seam between menu and store
//! - [`store`] - Diesel/SQLite connection, schema, seed data and queries
//! - [`chat`] - The blocking menu loop, generic over reader and writer
//! - [`cli`] - Command-line parsing and command handlers
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use orderdesk::chat::Chatbot;
//! use orderdesk::store::Store;
//!
//! fn main() -> orderdesk::error::Result<()> {
//!     let mut store = Store::in_memory()?;
//!     store.initialize()?;
//!
//!     let input = std::io::Cursor::new("1\njohn.doe@example.com\nno\n");
//!     Chatbot::new(&mut store, input, std::io::stdout()).run()
//! }
//! ```

pub mod chat;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
pub mod store;
