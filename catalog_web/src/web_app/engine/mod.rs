// web_app/engine/mod.rs - Filter/paginate engine
//
// Pure data transformation, no browser types:
// - state.rs: FilterState and its transitions
// - filter.rs: category / material / price filters
// - pagination.rs: page math and slicing
// - session.rs: latest-wins ordering of overlapping passes
//
// `run` ties them together. It takes the state explicitly and hands back
// the (possibly clamped) state alongside the page to render.

pub mod filter;
pub mod pagination;
pub mod session;
pub mod state;

pub use filter::{apply_filters, matches, on_sale};
pub use pagination::{page_count, page_window, paginate, Page};
pub use session::FilterSession;
pub use state::{parse_page_size, FilterState};

use crate::web_app::model::Product;

/// Result of one filter pass
#[derive(Clone, Debug, PartialEq)]
pub struct FilterOutcome {
    /// Input state with the page clamped to the filtered result
    pub state: FilterState,
    pub page: Page<Product>,
}

/// Filter the full collection, clamp the page and cut it out.
///
/// A page beyond the last one (after a narrowing filter) is clamped to the
/// last page; an empty result shows page 1 with no items.
pub fn run(products: Vec<Product>, state: FilterState) -> FilterOutcome {
    let filtered = apply_filters(products, &state);
    let pages = page_count(filtered.len(), state.page_size());
    let state = state.clamp_page(pages);
    let page = paginate(filtered, state.page(), state.page_size());

    tracing::debug!(
        total = page.total,
        page = page.number,
        page_count = page.page_count,
        "filtered catalog"
    );

    FilterOutcome { state, page }
}
