//! HTTP request handlers.

pub mod orders;

pub use orders::{
    create_order_handler, delete_order_handler, get_order_handler, list_orders_handler,
    not_found_handler, update_order_handler,
};
