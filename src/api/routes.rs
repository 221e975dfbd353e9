//! The order route registrations.

use axum::http::Method;

use crate::error::ConfigError;
use crate::routing::{RequestKind, RouteTable};

/// Builds the route table for the order endpoints.
///
/// # Routes
///
/// - `GET    /orders`       - List orders
/// - `POST   /orders`       - Create an order
/// - `GET    /orders/{Id}`  - Fetch a single order
/// - `PUT    /orders/{Id}`  - Update an order
/// - `DELETE /orders/{Id}`  - Delete an order
///
/// # Errors
///
/// Returns a [`ConfigError`] if the registrations conflict; with this fixed
/// table that indicates a programming error and aborts startup.
pub fn order_routes() -> Result<RouteTable, ConfigError> {
    let mut table = RouteTable::new();
    table
        .register(Method::GET, "/orders", RequestKind::GetOrders)?
        .register(Method::POST, "/orders", RequestKind::CreateOrder)?
        .register(Method::GET, "/orders/{Id}", RequestKind::GetOrder)?
        .register(Method::PUT, "/orders/{Id}", RequestKind::UpdateOrder)?
        .register(Method::DELETE, "/orders/{Id}", RequestKind::DeleteOrder)?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_routes_register_cleanly() {
        let table = order_routes().unwrap();
        assert_eq!(table.entries().len(), 5);
    }

    #[test]
    fn test_order_routes_cover_the_contract() {
        let table = order_routes().unwrap();

        let kind = |method: Method, path: &str| table.resolve(&method, path).map(|m| m.kind);

        assert_eq!(kind(Method::GET, "/orders"), Some(RequestKind::GetOrders));
        assert_eq!(kind(Method::POST, "/orders"), Some(RequestKind::CreateOrder));
        assert_eq!(kind(Method::GET, "/orders/3"), Some(RequestKind::GetOrder));
        assert_eq!(kind(Method::PUT, "/orders/3"), Some(RequestKind::UpdateOrder));
        assert_eq!(
            kind(Method::DELETE, "/orders/3"),
            Some(RequestKind::DeleteOrder)
        );
    }
}
