// Column types mirror the DDL in `seed::TABLES`.

diesel::table! {
    #[sql_name = "Users"]
    users (user_id) {
        user_id -> Integer,
        name -> Text,
        email -> Text,
    }
}

diesel::table! {
    #[sql_name = "Products"]
    products (product_id) {
        product_id -> Integer,
        name -> Text,
        price -> Double,
        stock_quantity -> Integer,
    }
}

diesel::table! {
    #[sql_name = "Orders"]
    orders (order_id) {
        order_id -> Integer,
        user_id -> Nullable<Integer>,
        order_date -> Nullable<Timestamp>,
        status -> Nullable<Text>,
    }
}

diesel::table! {
    #[sql_name = "Order_Items"]
    order_items (order_item_id) {
        order_item_id -> Integer,
        order_id -> Nullable<Integer>,
        product_id -> Nullable<Integer>,
        quantity -> Integer,
        price -> Double,
    }
}

diesel::table! {
    #[sql_name = "Categories"]
    categories (category_id) {
        category_id -> Integer,
        category_name -> Text,
    }
}

diesel::joinable!(orders -> users (user_id));
diesel::joinable!(order_items -> orders (order_id));
diesel::joinable!(order_items -> products (product_id));

diesel::allow_tables_to_appear_in_same_query!(categories, order_items, orders, products, users,);
