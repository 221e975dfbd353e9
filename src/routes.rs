//! Axum router construction from the route table.
//!
//! The table is the single source of truth: every entry is turned into an
//! Axum route, and anything the table does not know falls through to the
//! 404 handler. All responses are JSON.

use axum::http::Method;
use axum::routing::{MethodFilter, MethodRouter, on};
use axum::Router;
use tower::Layer;
use tower_http::LatencyUnit;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::api::handlers::{
    create_order_handler, delete_order_handler, get_order_handler, list_orders_handler,
    not_found_handler, update_order_handler,
};
use crate::error::ConfigError;
use crate::routing::{RequestKind, RouteTable};
use crate::state::AppState;

fn method_router(method: &Method, kind: RequestKind) -> Result<MethodRouter<AppState>, ConfigError> {
    let filter =
        MethodFilter::try_from(method.clone()).map_err(|_| ConfigError::UnsupportedMethod {
            method: method.to_string(),
        })?;

    Ok(match kind {
        RequestKind::GetOrders => on(filter, list_orders_handler),
        RequestKind::CreateOrder => on(filter, create_order_handler),
        RequestKind::GetOrder => on(filter, get_order_handler),
        RequestKind::UpdateOrder => on(filter, update_order_handler),
        RequestKind::DeleteOrder => on(filter, delete_order_handler),
    })
}

/// Builds the bare application router from a route table.
///
/// # Errors
///
/// Returns a [`ConfigError`] if an entry's method cannot be routed.
pub fn router(table: &RouteTable, state: AppState) -> Result<Router, ConfigError> {
    let mut router = Router::new();

    for entry in table.entries() {
        router = router.route(
            entry.pattern().as_str(),
            method_router(entry.method(), entry.kind())?,
        );
    }

    Ok(router.fallback(not_found_handler).with_state(state))
}

/// The full router with tracing and path normalization, ready to serve.
pub fn app_router(table: &RouteTable, state: AppState) -> Result<NormalizePath<Router>, ConfigError> {
    let router = router(table, state)?.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    );

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
