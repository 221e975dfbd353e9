//! No-op order repository.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::Order;
use crate::domain::repositories::OrderRepository;
use crate::error::AppError;

/// An order repository that stores nothing.
///
/// Lists are empty, lookups miss, and mutations succeed without effect.
pub struct StubOrderRepository;

impl StubOrderRepository {
    pub fn new() -> Self {
        debug!("Using StubOrderRepository (no persistence)");
        Self
    }
}

impl Default for StubOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for StubOrderRepository {
    async fn list(&self) -> Result<Vec<Order>, AppError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Order>, AppError> {
        Ok(None)
    }

    async fn create(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn update(&self, _id: i64) -> Result<(), AppError> {
        Ok(())
    }

    async fn delete(&self, _id: i64) -> Result<(), AppError> {
        Ok(())
    }
}
