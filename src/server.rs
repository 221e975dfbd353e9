//! HTTP server initialization and runtime setup.
//!
//! Wires the container, resolves the capability graph into [`AppState`],
//! builds the route table and router, and runs the Axum server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;

use crate::api::routes::order_routes;
use crate::application::mappers::ProductMapper;
use crate::application::services::OrderService;
use crate::config::Config;
use crate::container::{Container, Scope};
use crate::domain::repositories::{OrderRepository, ProductRepository};
use crate::infrastructure::stubs::{
    StubOrderRepository, StubProductMapper, StubProductRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

/// Registers every capability the service needs.
///
/// The order repository and product mapper are reused within the container;
/// the product repository is transient, matching a dependency that is
/// constructor-injected per consumer.
pub fn build_container() -> Container {
    let mut container = Container::new();

    container.register::<Arc<dyn OrderRepository>>(Scope::Container, || {
        Arc::new(StubOrderRepository::new())
    });
    container.register::<Arc<dyn ProductRepository>>(Scope::Transient, || {
        Arc::new(StubProductRepository::new())
    });
    container.register::<Arc<dyn ProductMapper>>(Scope::Container, || {
        Arc::new(StubProductMapper::new())
    });

    container
}

/// Resolves the capability graph into the shared application state.
///
/// # Errors
///
/// Fails with a configuration error when a capability is missing.
pub fn build_state(container: &Container, config: &Config) -> Result<AppState> {
    let order_service = Arc::new(OrderService::new(
        container.resolve::<Arc<dyn OrderRepository>>()?,
        container.resolve::<Arc<dyn ProductRepository>>()?,
        container.resolve::<Arc<dyn ProductMapper>>()?,
    ));

    Ok(AppState {
        order_service,
        base_url: config.base_url.clone(),
    })
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The container or route table is misconfigured
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let container = build_container();
    let state = build_state(&container, &config)?;

    let table = order_routes()?;
    tracing::info!("Route table built ({} routes)", table.entries().len());

    let app = app_router(&table, state)?;

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
