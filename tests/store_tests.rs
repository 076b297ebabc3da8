//! Store provisioning, seeding and lookups against real database files.

mod support;

use diesel::prelude::*;
use orderdesk::domain::OrderStatus;
use orderdesk::error::Error;
use orderdesk::port::OrderLookup;
use orderdesk::store::Store;

use support::{count, TempDb, TABLES};

#[test]
fn fresh_file_gets_five_tables_with_three_rows_each() {
    let db = TempDb::create();
    assert!(!db.path().exists());

    let mut store = db.open();
    store.initialize().unwrap();

    assert!(db.path().exists());
    for table in TABLES {
        assert_eq!(count(store.connection(), table), 3, "table {table}");
    }
}

#[test]
fn seed_rows_survive_reopening() {
    let db = TempDb::create();
    db.open().initialize().unwrap();

    let mut store = db.open();
    for table in TABLES {
        assert_eq!(count(store.connection(), table), 3, "table {table}");
    }
}

#[test]
fn second_initialization_hits_unique_email_and_adds_nothing() {
    let db = TempDb::create();
    db.open().initialize().unwrap();

    let mut store = db.open();
    let err = store.initialize().unwrap_err();
    match err {
        Error::Database(message) => assert!(
            message.contains("UNIQUE constraint failed: Users.email"),
            "unexpected message: {message}"
        ),
        other => panic!("expected database error, got {other}"),
    }

    for table in TABLES {
        assert_eq!(count(store.connection(), table), 3, "table {table}");
    }
}

#[test]
fn seeding_has_no_only_if_empty_guard() {
    let db = TempDb::create();
    let mut store = db.open();
    store.initialize().unwrap();

    diesel::sql_query("DELETE FROM Users")
        .execute(store.connection())
        .unwrap();
    store.initialize().unwrap();

    assert_eq!(count(store.connection(), "Users"), 3);
    for table in ["Products", "Orders", "Order_Items", "Categories"] {
        assert_eq!(count(store.connection(), table), 6, "table {table}");
    }
}

#[test]
fn reseeded_users_get_fresh_identifiers() {
    let db = TempDb::create();
    let mut store = db.open();
    store.initialize().unwrap();

    diesel::sql_query("DELETE FROM Users")
        .execute(store.connection())
        .unwrap();
    store.initialize().unwrap();

    let details = store
        .order_details("john.doe@example.com")
        .unwrap()
        .unwrap();
    assert_eq!(details.user.id, 4);
    // The reseeded orders still point at user ids 1..3.
    assert!(details.orders.is_empty());
}

#[test]
fn enforced_foreign_keys_reject_orphaning_orders() {
    let db = TempDb::create();
    let mut config = db.config();
    config.enforce_foreign_keys = true;

    let mut store = Store::open(&config).unwrap();
    store.initialize().unwrap();

    let result = diesel::sql_query("DELETE FROM Users").execute(store.connection());
    assert!(result.is_err());
}

#[test]
fn order_details_lists_orders_with_date_and_status() {
    let db = TempDb::create();
    let mut store = db.open();
    store.initialize().unwrap();

    let details = store
        .order_details("mike.johnson@example.com")
        .unwrap()
        .unwrap();
    assert_eq!(details.user.name, "Mike Johnson");
    assert_eq!(details.user.email, "mike.johnson@example.com");
    assert_eq!(details.orders.len(), 1);
    assert_eq!(details.orders[0].id, 3);
    assert_eq!(details.orders[0].status, Some(OrderStatus::Delivered));
    assert!(details.orders[0].placed_at.is_some());
}

#[test]
fn order_details_lists_orders_in_insertion_order() {
    let db = TempDb::create();
    let mut store = db.open();
    store.initialize().unwrap();

    diesel::sql_query(
        "INSERT INTO Orders (user_id, status) VALUES (1, 'shipped'), (1, 'delivered')",
    )
    .execute(store.connection())
    .unwrap();

    let details = store
        .order_details("john.doe@example.com")
        .unwrap()
        .unwrap();
    let ids: Vec<i32> = details.orders.iter().map(|order| order.id).collect();
    let statuses: Vec<Option<OrderStatus>> =
        details.orders.iter().map(|order| order.status).collect();
    assert_eq!(ids, [1, 4, 5]);
    assert_eq!(
        statuses,
        [
            Some(OrderStatus::Pending),
            Some(OrderStatus::Shipped),
            Some(OrderStatus::Delivered)
        ]
    );
}

#[test]
fn new_orders_default_to_pending() {
    let db = TempDb::create();
    let mut store = db.open();
    store.initialize().unwrap();

    diesel::sql_query("INSERT INTO Orders (user_id) VALUES (2)")
        .execute(store.connection())
        .unwrap();

    let report = store.order_status("2").unwrap().unwrap();
    let last = report.orders.last().unwrap();
    assert_eq!(last.id, 4);
    assert_eq!(last.status, Some(OrderStatus::Pending));
}

#[test]
fn status_check_constraint_rejects_unknown_values() {
    let db = TempDb::create();
    let mut store = db.open();
    store.initialize().unwrap();

    let result = diesel::sql_query("INSERT INTO Orders (user_id, status) VALUES (1, 'lost')")
        .execute(store.connection());
    assert!(result.is_err());
}

#[test]
fn order_status_by_id_matches_lookup_by_email() {
    let db = TempDb::create();
    let mut store = db.open();
    store.initialize().unwrap();

    let by_id = store.order_status("1").unwrap().unwrap();
    let by_email = store
        .order_status("john.doe@example.com")
        .unwrap()
        .unwrap();

    assert_eq!(by_id.user, by_email.user);
    assert_eq!(by_id.user.name, "John Doe");
    assert_eq!(by_id.orders, by_email.orders);
    assert_eq!(by_id.orders.len(), 1);
    assert_eq!(by_id.orders[0].status, Some(OrderStatus::Pending));
}

#[test]
fn order_status_can_include_another_users_order() {
    let db = TempDb::create();
    let mut store = db.open();
    store.initialize().unwrap();

    diesel::sql_query(
        "INSERT INTO Users (name, email) VALUES ('Amy Lee', 'amy.lee@example.com')",
    )
    .execute(store.connection())
    .unwrap();
    diesel::sql_query("INSERT INTO Orders (user_id, status) VALUES (1, 'shipped')")
        .execute(store.connection())
        .unwrap();

    // "4" resolves user 4, who owns nothing, but also matches order 4 of user 1.
    let report = store.order_status("4").unwrap().unwrap();
    assert_eq!(report.user.name, "Amy Lee");
    assert_eq!(report.orders.len(), 1);
    assert_eq!(report.orders[0].id, 4);
    assert_eq!(report.orders[0].status, Some(OrderStatus::Shipped));

    let by_email = store
        .order_status("amy.lee@example.com")
        .unwrap()
        .unwrap();
    assert!(by_email.orders.is_empty());
}

#[test]
fn unknown_identifiers_resolve_nobody() {
    let db = TempDb::create();
    let mut store = db.open();
    store.initialize().unwrap();

    assert!(store.order_details("nobody@example.com").unwrap().is_none());
    assert!(store.order_status("42").unwrap().is_none());
    assert!(store.order_status("").unwrap().is_none());
}
