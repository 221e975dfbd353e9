//! Order service holding the injected repository and mapper capabilities.

use std::sync::Arc;

use crate::application::mappers::{ProductMapper, ProductSummary};
use crate::domain::entities::Order;
use crate::domain::repositories::{OrderRepository, ProductRepository};
use crate::error::AppError;

/// An order together with its mapped product lines.
#[derive(Debug, Clone)]
pub struct OrderDetails {
    pub order: Order,
    pub products: Vec<ProductSummary>,
}

/// Service behind the order endpoints.
///
/// Holds the capabilities resolved from the container at startup. The
/// methods forward to the injected stubs and stay intentionally empty of
/// business logic; they are the extension points a real implementation
/// would fill in.
pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
    products: Arc<dyn ProductRepository>,
    mapper: Arc<dyn ProductMapper>,
}

impl OrderService {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        products: Arc<dyn ProductRepository>,
        mapper: Arc<dyn ProductMapper>,
    ) -> Self {
        Self {
            orders,
            products,
            mapper,
        }
    }

    /// Lists all orders.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on repository errors.
    pub async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        self.orders.list().await
    }

    /// Fetches a single order with its product lines, or `None` when the
    /// order does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on repository errors.
    pub async fn get_order(&self, id: i64) -> Result<Option<OrderDetails>, AppError> {
        let Some(order) = self.orders.find_by_id(id).await? else {
            return Ok(None);
        };

        let products = self
            .products
            .list_for_order(order.id)
            .await?
            .iter()
            .map(|product| self.mapper.to_summary(product))
            .collect();

        Ok(Some(OrderDetails { order, products }))
    }

    /// Creates an order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on repository errors.
    pub async fn create_order(&self) -> Result<(), AppError> {
        self.orders.create().await
    }

    /// Updates an order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on repository errors.
    pub async fn update_order(&self, id: i64) -> Result<(), AppError> {
        self.orders.update(id).await
    }

    /// Deletes an order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on repository errors.
    pub async fn delete_order(&self, id: i64) -> Result<(), AppError> {
        self.orders.delete(id).await
    }
}
