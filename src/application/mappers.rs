//! Mapper capability translating domain entities into response shapes.

use serde::Serialize;

use crate::domain::entities::Product;

/// Product data as exposed in responses.
#[derive(Debug, Clone, Serialize)]
pub struct ProductSummary {
    pub id: i64,
    pub name: String,
}

/// Maps domain products to their response representation.
///
/// Registered in the container with container scope, mirroring a mapper
/// dependency that is safe to share across requests.
#[cfg_attr(test, mockall::automock)]
pub trait ProductMapper: Send + Sync {
    fn to_summary(&self, product: &Product) -> ProductSummary;
}
