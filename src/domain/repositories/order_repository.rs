//! Repository trait for orders.

use async_trait::async_trait;

use crate::domain::entities::Order;
use crate::error::AppError;

/// Repository interface for order records.
///
/// The sample ships no persistence; the only implementation is
/// [`crate::infrastructure::stubs::StubOrderRepository`], which returns empty
/// results. The trait exists as the extension point a real backend would
/// implement.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Lists all orders.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn list(&self) -> Result<Vec<Order>, AppError>;

    /// Finds an order by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError>;

    /// Creates an order record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn create(&self) -> Result<(), AppError>;

    /// Updates an order record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn update(&self, id: i64) -> Result<(), AppError>;

    /// Deletes an order record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
