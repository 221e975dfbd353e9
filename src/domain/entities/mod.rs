//! Domain entities.
//!
//! - [`Order`] - An order record
//! - [`Product`] - A product referenced by orders

pub mod order;
pub mod product;

pub use order::Order;
pub use product::Product;
