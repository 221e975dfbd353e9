//! Shared application state.

use std::sync::Arc;

use crate::application::services::OrderService;

/// The resolved object graph handed to every handler.
///
/// Built once at startup from the container registrations and immutable
/// afterwards, so it is safe to clone into concurrent requests.
#[derive(Clone)]
pub struct AppState {
    pub order_service: Arc<OrderService>,
    /// External base URL used for the `Location` header.
    pub base_url: String,
}
