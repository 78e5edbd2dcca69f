// web_app/engine/pagination.rs - Page math
//
// Pages are 1-based. Page `n` covers `[(n-1)*size, n*size)` of the
// filtered collection, cut short at its end.

use std::num::NonZeroUsize;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// `ceil(total / page_size)`
pub fn page_count(total: usize, page_size: NonZeroUsize) -> usize {
    total.div_ceil(page_size.get())
}

/// Index window of a 1-based page, clipped to `total`
pub fn page_window(page: NonZeroUsize, page_size: NonZeroUsize, total: usize) -> Range<usize> {
    let start = (page.get() - 1).saturating_mul(page_size.get()).min(total);
    let end = page.get().saturating_mul(page_size.get()).min(total);
    start..end
}

/// One page of a collection
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number actually shown
    pub number: usize,
    pub page_count: usize,
    /// Size of the whole (filtered) collection
    pub total: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cut `page` out of `items`. The caller is expected to have clamped the
/// page already; an out-of-range page yields an empty slice.
pub fn paginate<T>(items: Vec<T>, page: NonZeroUsize, page_size: NonZeroUsize) -> Page<T> {
    let total = items.len();
    let window = page_window(page, page_size, total);
    let items = items
        .into_iter()
        .skip(window.start)
        .take(window.len())
        .collect();

    Page {
        items,
        number: page.get(),
        page_count: page_count(total, page_size),
        total,
    }
}
