//! No-op product repository.

use async_trait::async_trait;

use crate::domain::entities::Product;
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;

/// A product repository that knows no products.
pub struct StubProductRepository;

impl StubProductRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StubProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for StubProductRepository {
    async fn list_for_order(&self, _order_id: i64) -> Result<Vec<Product>, AppError> {
        Ok(Vec::new())
    }
}
