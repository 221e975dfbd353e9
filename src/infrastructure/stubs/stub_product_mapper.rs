//! Field-for-field product mapper.

use crate::application::mappers::{ProductMapper, ProductSummary};
use crate::domain::entities::Product;

/// Maps products to summaries without transformation.
pub struct StubProductMapper;

impl StubProductMapper {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StubProductMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductMapper for StubProductMapper {
    fn to_summary(&self, product: &Product) -> ProductSummary {
        ProductSummary {
            id: product.id,
            name: product.name.clone(),
        }
    }
}
