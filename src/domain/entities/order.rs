//! Order entity.

use chrono::{DateTime, Utc};

/// An order record.
///
/// Deliberately minimal: the sample has no persistence, so an order carries
/// only its identity and creation time.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: i64,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(id: i64, created_at: DateTime<Utc>) -> Self {
        Self { id, created_at }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_creation() {
        let now = Utc::now();
        let order = Order::new(5, now);

        assert_eq!(order.id, 5);
        assert_eq!(order.created_at, now);
    }
}
