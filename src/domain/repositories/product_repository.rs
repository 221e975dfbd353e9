//! Repository trait for products.

use async_trait::async_trait;

use crate::domain::entities::Product;
use crate::error::AppError;

/// Repository interface for products referenced by orders.
///
/// Injected into the order service purely to demonstrate constructor
/// injection; the stub implementation returns no products.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Lists the products belonging to an order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn list_for_order(&self, order_id: i64) -> Result<Vec<Product>, AppError>;
}
