// web_app/engine/state.rs - Filter state and its transitions
//
// The state is a plain value: every transition consumes the current state
// and returns the next one. Nothing here is shared or mutated in place.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::web_app::config::CatalogConfig;
use crate::web_app::model::{ControlValueError, PriceCeiling, Selection};

/// Current category, material, price ceiling, page and page size
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    category: Selection,
    material: Selection,
    price_ceiling: PriceCeiling,
    /// 1-based
    page: NonZeroUsize,
    page_size: NonZeroUsize,
}

impl FilterState {
    /// Initial state: everything "all", page 1, configured page size and
    /// default ceiling.
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            category: Selection::All,
            material: Selection::All,
            price_ceiling: PriceCeiling::new(config.price_range.default_ceiling)
                .unwrap_or_else(|error| {
                    tracing::warn!(%error, "invalid default price ceiling, starting at zero");
                    PriceCeiling::ZERO
                }),
            page: NonZeroUsize::MIN,
            page_size: config.default_page_size,
        }
    }

    pub fn category(&self) -> &Selection {
        &self.category
    }

    pub fn material(&self) -> &Selection {
        &self.material
    }

    pub fn price_ceiling(&self) -> PriceCeiling {
        self.price_ceiling
    }

    pub fn page(&self) -> NonZeroUsize {
        self.page
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// The page is kept; `clamp_page` pulls it back if the result shrinks.
    pub fn with_category(self, category: Selection) -> Self {
        Self { category, ..self }
    }

    pub fn with_material(self, material: Selection) -> Self {
        Self { material, ..self }
    }

    pub fn with_price_ceiling(self, price_ceiling: PriceCeiling) -> Self {
        Self {
            price_ceiling,
            ..self
        }
    }

    /// Page 0 is treated as page 1.
    pub fn with_page(self, page: usize) -> Self {
        Self {
            page: NonZeroUsize::new(page).unwrap_or(NonZeroUsize::MIN),
            ..self
        }
    }

    /// Changing the page size always goes back to page 1.
    pub fn with_page_size(self, page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            page: NonZeroUsize::MIN,
            ..self
        }
    }

    /// Clamp the page into `1..=page_count`; an empty result clamps to page 1.
    pub fn clamp_page(self, page_count: usize) -> Self {
        let last = NonZeroUsize::new(page_count).unwrap_or(NonZeroUsize::MIN);
        Self {
            page: self.page.min(last),
            ..self
        }
    }
}

/// Parse the page-size control's value.
pub fn parse_page_size(raw: &str) -> Result<NonZeroUsize, ControlValueError> {
    raw.trim()
        .parse::<NonZeroUsize>()
        .map_err(|_| ControlValueError::InvalidPageSize(raw.to_string()))
}
