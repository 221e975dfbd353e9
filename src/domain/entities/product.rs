//! Product entity.

/// A product referenced by an order.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: i64,
    pub name: String,
}

impl Product {
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}
