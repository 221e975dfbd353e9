//! Handlers for the order endpoints.
//!
//! Each handler deserializes its request DTO, runs the applicable rule set,
//! and only then touches the service. Bodies are deliberately stubs: the
//! list endpoint answers with an empty collection plus a `Location` header,
//! the single-order endpoint with JSON `null`, and the mutations with a bare
//! success status. They are the extension points a real implementation
//! would fill in.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{Method, StatusCode, Uri, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::api::dto::orders::{
    DeleteOrderRequest, GetOrderRequest, GetOrdersRequest, OrderDetailsResponse, OrderItem,
    OrderListResponse, UpdateOrderRequest,
};
use crate::error::AppError;
use crate::state::AppState;
use crate::validation::orders::{GET_ORDER_RULES, GET_ORDERS_RULES};

/// Lists orders.
///
/// # Endpoint
///
/// `GET /orders`
///
/// # Query Parameters
///
/// - `Id` (optional): order-id filter, must be greater than 2 when present
///
/// # Errors
///
/// Returns 400 when the `Id` rule fails.
pub async fn list_orders_handler(
    method: Method,
    State(state): State<AppState>,
    Query(request): Query<GetOrdersRequest>,
) -> Result<impl IntoResponse, AppError> {
    GET_ORDERS_RULES.check(&method, &request)?;

    let orders = state.order_service.list_orders().await?;

    let items = orders
        .into_iter()
        .map(|order| OrderItem {
            id: order.id,
            created_at: order.created_at,
        })
        .collect();

    let location = format!("{}/orders", state.base_url);

    Ok((
        [(header::LOCATION, location)],
        Json(OrderListResponse { items }),
    ))
}

/// Creates an order.
///
/// # Endpoint
///
/// `POST /orders`
pub async fn create_order_handler(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.order_service.create_order().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fetches a single order.
///
/// # Endpoint
///
/// `GET /orders/{Id}`
///
/// Answers `null` when the order does not exist, which is always the case
/// with the stub repository.
///
/// # Errors
///
/// Returns 400 when the `Id` rule fails; the service is never consulted.
pub async fn get_order_handler(
    method: Method,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Option<OrderDetailsResponse>>, AppError> {
    let request = GetOrderRequest { id };
    GET_ORDER_RULES.check(&method, &request)?;

    let details = state.order_service.get_order(request.id).await?;

    Ok(Json(details.map(|d| OrderDetailsResponse {
        id: d.order.id,
        created_at: d.order.created_at,
        products: d.products,
    })))
}

/// Updates an order.
///
/// # Endpoint
///
/// `PUT /orders/{Id}`
pub async fn update_order_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let request = UpdateOrderRequest { id };
    state.order_service.update_order(request.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Deletes an order.
///
/// # Endpoint
///
/// `DELETE /orders/{Id}`
pub async fn delete_order_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let request = DeleteOrderRequest { id };
    state.order_service.delete_order(request.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for requests no route entry matches.
pub async fn not_found_handler(method: Method, uri: Uri) -> AppError {
    AppError::not_found(
        "No route matches the request",
        json!({ "method": method.as_str(), "path": uri.path() }),
    )
}
