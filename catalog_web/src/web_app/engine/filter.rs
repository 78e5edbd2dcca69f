// web_app/engine/filter.rs - Product filtering
//
// Filters run in a fixed order: category (exact), material (ignoring
// case), then price ceiling. Source order is preserved.

use crate::web_app::model::Product;

use super::state::FilterState;

/// Whether a single product passes every filter in `state`
pub fn matches(product: &Product, state: &FilterState) -> bool {
    state.category().matches_exact(&product.category)
        && state.material().matches_ignore_case(&product.material)
        && state.price_ceiling().admits(&product.price)
}

/// Keep the products that pass `state`'s filters, in source order.
pub fn apply_filters(products: Vec<Product>, state: &FilterState) -> Vec<Product> {
    products
        .into_iter()
        .filter(|product| matches(product, state))
        .collect()
}

/// Keep the products flagged as on sale, in source order.
pub fn on_sale(products: Vec<Product>) -> Vec<Product> {
    products.into_iter().filter(|product| product.on_sale).collect()
}
