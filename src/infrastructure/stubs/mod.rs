//! No-op capability implementations.
//!
//! These stand in for real persistence and mapping backends. Every
//! operation succeeds immediately with an empty result, which keeps the
//! handlers' terminal behavior well-defined without inventing business
//! logic.

pub mod stub_order_repository;
pub mod stub_product_mapper;
pub mod stub_product_repository;

pub use stub_order_repository::StubOrderRepository;
pub use stub_product_mapper::StubProductMapper;
pub use stub_product_repository::StubProductRepository;
