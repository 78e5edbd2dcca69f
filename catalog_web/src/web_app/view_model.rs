// web_app/view_model.rs - Display data for the components
//
// Everything the components show is computed here from plain model values,
// so the formatting rules can be tested without a browser.

use std::collections::HashSet;
use std::num::NonZeroUsize;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::web_app::model::{Category, PriceCeiling, Product, ProductId, ALL};

/// One `<option>` of a select control
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The synthetic "All" entry heading category and material selects
    pub fn all() -> Self {
        Self::new(ALL, "All")
    }
}

/// "All" followed by each category, in document order
pub fn category_options(categories: &[Category]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::all())
        .chain(
            categories
                .iter()
                .map(|category| SelectOption::new(category.name.clone(), category.name.clone())),
        )
        .collect()
}

/// "All" followed by the distinct materials of `products`
///
/// Materials are compared ignoring case (as the material filter does); the
/// first spelling seen is kept. Empty materials are skipped.
pub fn material_options(products: &[Product]) -> Vec<SelectOption> {
    let mut seen = HashSet::new();
    let materials = products
        .iter()
        .map(|product| product.material.trim())
        .filter(|material| !material.is_empty())
        .filter(|material| seen.insert(material.to_lowercase()))
        .map(|material| SelectOption::new(material, material));

    std::iter::once(SelectOption::all()).chain(materials).collect()
}

pub fn page_size_options(sizes: &[NonZeroUsize]) -> Vec<SelectOption> {
    sizes
        .iter()
        .map(|size| SelectOption::new(size.to_string(), size.to_string()))
        .collect()
}

/// `$` prefix, two decimals
pub fn format_price(price: &Decimal) -> String {
    format!("${:.2}", price)
}

/// Text of the `priceRangeValue` label
pub fn price_range_label(ceiling: PriceCeiling) -> String {
    format!("$0 - ${}", ceiling)
}

/// Results header above the grid
pub fn results_summary(total: usize) -> String {
    if total == 1 {
        "1 product found".to_string()
    } else {
        format!("{} products found", total)
    }
}

/// Everything a product card shows
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCardView {
    pub id: ProductId,
    pub name: String,
    pub material: String,
    pub description: String,
    pub price_label: String,
    pub image_src: String,
    pub image_alt: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            material: product.material.clone(),
            description: product.description.clone(),
            price_label: format_price(&product.price),
            image_src: product.img.clone(),
            image_alt: product.name.clone(),
        }
    }
}

/// One pagination control
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageLink {
    /// 1-based
    pub number: usize,
    pub active: bool,
}

/// One link per page, `1..=page_count`, marking `current` as active
pub fn pagination_links(page_count: usize, current: usize) -> Vec<PageLink> {
    (1..=page_count)
        .map(|number| PageLink {
            number,
            active: number == current,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_options_prepend_all() {
        let options = category_options(&[
            Category {
                name: "Rings".into(),
            },
            Category {
                name: "Necklaces".into(),
            },
        ]);
        assert_eq!(
            options,
            vec![
                SelectOption::new("all", "All"),
                SelectOption::new("Rings", "Rings"),
                SelectOption::new("Necklaces", "Necklaces"),
            ]
        );
    }

    #[test]
    fn test_category_options_empty_document() {
        assert_eq!(category_options(&[]), vec![SelectOption::all()]);
    }

    #[test]
    fn test_price_formatting() {
        let prices = [
            (Decimal::new(0, 0), "$0.00"),
            (Decimal::new(100, 0), "$100.00"),
            (Decimal::new(999, 2), "$9.99"),
            (Decimal::new(1495, 1), "$149.50"),
        ];
        for (price, expected) in prices {
            assert_eq!(format_price(&price), expected);
        }
    }

    #[test]
    fn test_price_range_label() {
        assert_eq!(price_range_label("250".parse().unwrap()), "$0 - $250");
        assert_eq!(price_range_label("99.5".parse().unwrap()), "$0 - $99.5");
    }

    #[test]
    fn test_results_summary() {
        assert_eq!(results_summary(0), "0 products found");
        assert_eq!(results_summary(1), "1 product found");
        assert_eq!(results_summary(42), "42 products found");
    }

    #[test]
    fn test_pagination_links() {
        let links = pagination_links(3, 2);
        assert_eq!(links.len(), 3);
        assert_eq!(
            links.iter().map(|l| l.number).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(
            links.iter().filter(|l| l.active).map(|l| l.number).collect::<Vec<_>>(),
            vec![2]
        );
        assert!(pagination_links(0, 1).is_empty());
    }

    #[test]
    fn test_page_size_options() {
        let sizes: Vec<NonZeroUsize> = [12, 24].into_iter().filter_map(NonZeroUsize::new).collect();
        assert_eq!(
            page_size_options(&sizes),
            vec![SelectOption::new("12", "12"), SelectOption::new("24", "24")]
        );
    }
}
