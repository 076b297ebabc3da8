//! Schema creation and sample data.
//!
//! Tables are created with `CREATE TABLE IF NOT EXISTS`, so that half is
//! idempotent. The seed half is not: every call appends the same sample
//! rows, and because `Users.email` is unique a second call against a seeded
//! file fails on the first batch and leaves the store unchanged.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, info};

use super::model::{NewCategory, NewOrder, NewOrderItem, NewProduct, NewUser};
use super::schema::{categories, order_items, orders, products, users};
use crate::domain::OrderStatus;
use crate::error::Result;

/// Table names paired with their DDL, in creation order.
pub const TABLES: [(&str, &str); 5] = [
    (
        "Users",
        "CREATE TABLE IF NOT EXISTS Users (
            user_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(100) NOT NULL,
            email VARCHAR(100) UNIQUE NOT NULL
        )",
    ),
    (
        "Products",
        "CREATE TABLE IF NOT EXISTS Products (
            product_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(255) NOT NULL,
            price DECIMAL(10, 2) NOT NULL,
            stock_quantity INT NOT NULL DEFAULT 0
        )",
    ),
    (
        "Orders",
        "CREATE TABLE IF NOT EXISTS Orders (
            order_id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INT,
            order_date TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            status TEXT CHECK(status IN ('pending', 'shipped', 'delivered')) DEFAULT 'pending',
            FOREIGN KEY (user_id) REFERENCES Users(user_id)
        )",
    ),
    (
        "Order_Items",
        "CREATE TABLE IF NOT EXISTS Order_Items (
            order_item_id INTEGER PRIMARY KEY AUTOINCREMENT,
            order_id INT,
            product_id INT,
            quantity INT NOT NULL,
            price DECIMAL(10, 2) NOT NULL,
            FOREIGN KEY (order_id) REFERENCES Orders(order_id),
            FOREIGN KEY (product_id) REFERENCES Products(product_id)
        )",
    ),
    (
        "Categories",
        "CREATE TABLE IF NOT EXISTS Categories (
            category_id INTEGER PRIMARY KEY AUTOINCREMENT,
            category_name VARCHAR(100) NOT NULL
        )",
    ),
];

const SEED_USERS: [NewUser<'static>; 3] = [
    NewUser {
        name: "John Doe",
        email: "john.doe@example.com",
    },
    NewUser {
        name: "Jane Smith",
        email: "jane.smith@example.com",
    },
    NewUser {
        name: "Mike Johnson",
        email: "mike.johnson@example.com",
    },
];

const SEED_PRODUCTS: [NewProduct<'static>; 3] = [
    NewProduct {
        name: "Product A",
        price: 19.99,
        stock_quantity: 100,
    },
    NewProduct {
        name: "Product B",
        price: 29.99,
        stock_quantity: 50,
    },
    NewProduct {
        name: "Product C",
        price: 39.99,
        stock_quantity: 75,
    },
];

const SEED_ORDERS: [NewOrder<'static>; 3] = [
    NewOrder {
        user_id: 1,
        status: OrderStatus::Pending.as_str(),
    },
    NewOrder {
        user_id: 2,
        status: OrderStatus::Shipped.as_str(),
    },
    NewOrder {
        user_id: 3,
        status: OrderStatus::Delivered.as_str(),
    },
];

const SEED_ORDER_ITEMS: [NewOrderItem; 3] = [
    NewOrderItem {
        order_id: 1,
        product_id: 1,
        quantity: 2,
        price: 39.98,
    },
    NewOrderItem {
        order_id: 2,
        product_id: 2,
        quantity: 1,
        price: 29.99,
    },
    NewOrderItem {
        order_id: 3,
        product_id: 3,
        quantity: 3,
        price: 119.97,
    },
];

const SEED_CATEGORIES: [NewCategory<'static>; 3] = [
    NewCategory {
        category_name: "Category 1",
    },
    NewCategory {
        category_name: "Category 2",
    },
    NewCategory {
        category_name: "Category 3",
    },
];

/// Create the five tables if they do not exist yet.
///
/// # Errors
/// Returns the first DDL failure; later tables are not attempted.
pub fn create_tables(conn: &mut SqliteConnection) -> Result<()> {
    for (table, ddl) in TABLES {
        diesel::sql_query(ddl).execute(conn)?;
        debug!(table, "table ensured");
    }
    Ok(())
}

/// Append the sample rows in a single transaction.
///
/// # Errors
/// Returns the first failing batch. The transaction is rolled back, so
/// either all five batches land or none do.
pub fn insert_seed_rows(conn: &mut SqliteConnection) -> Result<()> {
    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        diesel::insert_into(users::table)
            .values(&SEED_USERS[..])
            .execute(conn)?;
        diesel::insert_into(products::table)
            .values(&SEED_PRODUCTS[..])
            .execute(conn)?;
        diesel::insert_into(orders::table)
            .values(&SEED_ORDERS[..])
            .execute(conn)?;
        diesel::insert_into(order_items::table)
            .values(&SEED_ORDER_ITEMS[..])
            .execute(conn)?;
        diesel::insert_into(categories::table)
            .values(&SEED_CATEGORIES[..])
            .execute(conn)?;
        Ok(())
    })?;

    info!("seed rows committed");
    Ok(())
}

/// Create the schema, then append the sample rows.
///
/// # Errors
/// Stops at the first engine error. Tables created before the failure
/// stay in place.
pub fn initialize(conn: &mut SqliteConnection) -> Result<()> {
    create_tables(conn)?;
    insert_seed_rows(conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::connection::open_in_memory;

    #[derive(QueryableByName)]
    struct Count {
        #[diesel(sql_type = diesel::sql_types::BigInt)]
        count: i64,
    }

    fn count(conn: &mut SqliteConnection, table: &str) -> i64 {
        diesel::sql_query(format!("SELECT COUNT(*) AS count FROM {table}"))
            .get_result::<Count>(conn)
            .unwrap()
            .count
    }

    #[test]
    fn create_tables_is_idempotent() {
        let mut conn = open_in_memory(false).unwrap();
        create_tables(&mut conn).unwrap();
        create_tables(&mut conn).unwrap();

        for (table, _) in TABLES {
            assert_eq!(count(&mut conn, table), 0);
        }
    }

    #[test]
    fn initialize_seeds_three_rows_per_table() {
        let mut conn = open_in_memory(false).unwrap();
        initialize(&mut conn).unwrap();

        for (table, _) in TABLES {
            assert_eq!(count(&mut conn, table), 3, "table {table}");
        }
    }

    #[test]
    fn seeding_without_tables_fails() {
        let mut conn = open_in_memory(false).unwrap();
        assert!(insert_seed_rows(&mut conn).is_err());
    }

    #[test]
    fn seed_orders_use_every_status() {
        let statuses: Vec<&str> = SEED_ORDERS.iter().map(|order| order.status).collect();
        assert_eq!(statuses, ["pending", "shipped", "delivered"]);
    }
}
