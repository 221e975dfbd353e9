//! Repository capability traits.
//!
//! These are the injected dependencies of
//! [`crate::application::services::OrderService`]. Implementations live in
//! [`crate::infrastructure::stubs`]; test mocks are generated with `mockall`.

pub mod order_repository;
pub mod product_repository;

pub use order_repository::OrderRepository;
pub use product_repository::ProductRepository;

#[cfg(test)]
pub use order_repository::MockOrderRepository;
#[cfg(test)]
pub use product_repository::MockProductRepository;
