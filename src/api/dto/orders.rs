//! Request and response DTOs for the order endpoints.
//!
//! Field names follow the wire contract (`Id`), hence the serde renames.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::mappers::ProductSummary;

/// Query-style request for `GET /orders`.
///
/// `Id` is an optional filter; when present it is subject to the order-id
/// validation rule.
#[derive(Debug, Clone, Deserialize)]
pub struct GetOrdersRequest {
    #[serde(rename = "Id")]
    pub id: Option<i64>,
}

/// Request for `POST /orders`. Carries no fields; the stub handler accepts
/// the bare request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateOrderRequest {}

/// Request for `GET /orders/{Id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetOrderRequest {
    #[serde(rename = "Id")]
    pub id: i64,
}

/// Request for `PUT /orders/{Id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrderRequest {
    #[serde(rename = "Id")]
    pub id: i64,
}

/// Request for `DELETE /orders/{Id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteOrderRequest {
    #[serde(rename = "Id")]
    pub id: i64,
}

/// A single order in a response.
#[derive(Debug, Serialize)]
pub struct OrderItem {
    pub id: i64,
    pub created_at: DateTime<Utc>,
}

/// Response body for `GET /orders`.
#[derive(Debug, Serialize)]
pub struct OrderListResponse {
    pub items: Vec<OrderItem>,
}

/// Response body for `GET /orders/{Id}` when the order exists.
#[derive(Debug, Serialize)]
pub struct OrderDetailsResponse {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub products: Vec<ProductSummary>,
}
