// web_app/model/mod.rs - Shared data models for the catalog
//
// These types mirror the static JSON documents the catalog reads
// (`data/categories.json` and `data/products.json`) and the values
// carried by the filter controls.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Control value meaning "no restriction" for category and material selects
pub const ALL: &str = "all";

pub type ProductId = u64;

/// Product from `data/products.json`
///
/// Only `id` is required. Every other field falls back to its default so
/// a structurally compatible document is accepted as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub on_sale: bool,
}

/// Category entry, used only as a filter option label
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

/// Shape of `data/categories.json`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriesDocument {
    pub categories: Vec<Category>,
}

/// Selected value of a category or material control
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Interpret a raw `<select>` value; `"all"` lifts the restriction.
    pub fn from_control(value: &str) -> Self {
        if value == ALL {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }

    pub fn control_value(&self) -> &str {
        match self {
            Selection::All => ALL,
            Selection::Only(value) => value,
        }
    }

    /// Case-sensitive comparison (categories)
    pub fn matches_exact(&self, candidate: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(value) => value == candidate,
        }
    }

    /// Case-insensitive comparison (materials)
    pub fn matches_ignore_case(&self, candidate: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(value) => value.to_lowercase() == candidate.to_lowercase(),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.control_value())
    }
}

/// Rejected raw values from the range and page-size controls
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControlValueError {
    #[error("price ceiling {0:?} is not a number")]
    InvalidPriceCeiling(String),

    #[error("price ceiling {0} is negative")]
    NegativePriceCeiling(Decimal),

    #[error("page size {0:?} is not a positive integer")]
    InvalidPageSize(String),
}

/// Inclusive upper bound on product price
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PriceCeiling(Decimal);

impl PriceCeiling {
    pub const ZERO: PriceCeiling = PriceCeiling(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, ControlValueError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ControlValueError::NegativePriceCeiling(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// `price <= ceiling`
    pub fn admits(&self, price: &Decimal) -> bool {
        *price <= self.0
    }
}

impl FromStr for PriceCeiling {
    type Err = ControlValueError;

    /// Parses the range control's string value. Surrounding whitespace is
    /// ignored; anything that is not a decimal number is rejected.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(raw.trim())
            .map_err(|_| ControlValueError::InvalidPriceCeiling(raw.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for PriceCeiling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
