//! Seams between the chat loop and the store.

mod lookup;

pub use lookup::OrderLookup;
