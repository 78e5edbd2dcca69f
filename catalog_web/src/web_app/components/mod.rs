// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: SelectControl, ResultsSummary
// - filters.rs: PriceRangeFilter, CatalogFilters
// - product.rs: ProductCard, ProductGrid
// - pagination.rs: Pagination

pub mod common;
pub mod filters;
pub mod pagination;
pub mod product;

pub use common::*;
pub use filters::*;
pub use pagination::*;
pub use product::*;
