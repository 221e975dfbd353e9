//! Validation rules for the order endpoints.
//!
//! One rule exists: on GET and POST, an order id must be greater than 2.
//! The rule is shared by the list request (optional `Id` query parameter)
//! and the single-order request (`Id` bound from the path).

use std::sync::LazyLock;

use axum::http::Method;

use crate::api::dto::orders::{GetOrderRequest, GetOrdersRequest};
use crate::validation::RuleSet;

const ORDER_ID_MESSAGE: &str = "OrderID has to be greater than 2";

fn order_id_rules<T: Send + Sync + 'static>(id_of: fn(&T) -> Option<i64>) -> RuleSet<T> {
    RuleSet::new().rule(
        &[Method::GET, Method::POST],
        "Id",
        "greater_than",
        ORDER_ID_MESSAGE,
        move |dto: &T| id_of(dto).is_none_or(|id| id > 2),
    )
}

/// Rules for `GetOrdersRequest`. An absent `Id` passes; a present one must
/// be greater than 2.
pub static GET_ORDERS_RULES: LazyLock<RuleSet<GetOrdersRequest>> =
    LazyLock::new(|| order_id_rules(|request| request.id));

/// Rules for `GetOrderRequest`, where `Id` always comes from the path.
pub static GET_ORDER_RULES: LazyLock<RuleSet<GetOrderRequest>> =
    LazyLock::new(|| order_id_rules(|request| Some(request.id)));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_above_threshold_passes() {
        let request = GetOrderRequest { id: 3 };
        assert!(GET_ORDER_RULES.validate(&Method::GET, &request).is_empty());
    }

    #[test]
    fn test_order_id_at_or_below_threshold_fails_with_literal_message() {
        for id in [-1, 0, 1, 2] {
            let request = GetOrderRequest { id };
            let violations = GET_ORDER_RULES.validate(&Method::GET, &request);
            assert_eq!(violations.len(), 1, "id={id}");
            assert_eq!(violations[0].field, "Id");
            assert_eq!(violations[0].message(), "OrderID has to be greater than 2");
        }
    }

    #[test]
    fn test_rule_applies_to_get_and_post_only() {
        let request = GetOrderRequest { id: 1 };

        assert_eq!(GET_ORDER_RULES.validate(&Method::GET, &request).len(), 1);
        assert_eq!(GET_ORDER_RULES.validate(&Method::POST, &request).len(), 1);
        assert!(GET_ORDER_RULES.validate(&Method::PUT, &request).is_empty());
        assert!(
            GET_ORDER_RULES
                .validate(&Method::DELETE, &request)
                .is_empty()
        );
    }

    #[test]
    fn test_list_request_without_id_passes() {
        let request = GetOrdersRequest { id: None };
        assert!(GET_ORDERS_RULES.validate(&Method::GET, &request).is_empty());
    }

    #[test]
    fn test_list_request_with_low_id_fails() {
        let request = GetOrdersRequest { id: Some(2) };
        let violations = GET_ORDERS_RULES.validate(&Method::GET, &request);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "Id");
    }
}
