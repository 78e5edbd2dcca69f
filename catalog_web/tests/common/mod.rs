// common/mod.rs - Shared test utilities for catalog fixtures
//
// This module provides:
// 1. Product and catalog builders with predictable categories, materials and prices
// 2. An in-memory CatalogSource that serves fixed documents, status failures
//    or unreachable endpoints, and counts how often it was asked
// 3. A gated CatalogSource whose products answer only once released

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::num::NonZeroUsize;

use async_trait::async_trait;
use futures::channel::oneshot;
use catalog_web::web_app::api::{CatalogSource, LoadError};
use catalog_web::web_app::config::CatalogConfig;
use catalog_web::web_app::model::{CategoriesDocument, Category, Product};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

pub const CATEGORIES: [&str; 3] = ["Rings", "Necklaces", "Bracelets"];
pub const MATERIALS: [&str; 4] = ["Gold", "silver", "Silver", "Platinum"];

/// Build a product with whole-dollar price
pub fn product(id: u64, category: &str, material: &str, price: i64) -> Product {
    Product {
        id,
        name: format!("Product {}", id),
        category: category.to_string(),
        material: material.to_string(),
        price: Decimal::from(price),
        description: format!("Description of product {}", id),
        img: format!("img/{}.jpg", id),
        on_sale: id % 3 == 0,
    }
}

/// `n` products cycling through the fixture categories and materials,
/// priced 25, 50, ... 250 and back
pub fn catalog(n: u64) -> Vec<Product> {
    (0..n)
        .map(|id| {
            product(
                id,
                CATEGORIES[id as usize % CATEGORIES.len()],
                MATERIALS[id as usize % MATERIALS.len()],
                25 * (1 + (id as i64 % 10)),
            )
        })
        .collect()
}

pub fn categories_document() -> CategoriesDocument {
    CategoriesDocument {
        categories: CATEGORIES
            .iter()
            .map(|name| Category {
                name: name.to_string(),
            })
            .collect(),
    }
}

pub fn size(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).expect("page size must be positive")
}

pub fn config_with_page_size(n: usize) -> CatalogConfig {
    CatalogConfig {
        default_page_size: size(n),
        ..CatalogConfig::default()
    }
}

/// What an endpoint answers
#[derive(Clone, Debug)]
pub enum Document {
    Body(String),
    Status(u16),
    Unreachable,
}

impl Document {
    pub fn json<T: serde::Serialize>(value: &T) -> Self {
        Document::Body(serde_json::to_string(value).expect("fixture serializes"))
    }

    fn resolve<T: DeserializeOwned>(&self, url: &str) -> Result<T, LoadError> {
        match self {
            Document::Body(body) => serde_json::from_str(body).map_err(|source| LoadError::Parse {
                url: url.to_string(),
                source,
            }),
            Document::Status(status) => Err(LoadError::Status {
                url: url.to_string(),
                status: *status,
            }),
            Document::Unreachable => Err(LoadError::Request {
                url: url.to_string(),
                message: "connection refused".to_string(),
            }),
        }
    }
}

/// In-memory catalog endpoints
pub struct FixtureSource {
    categories: Document,
    products: Document,
    category_fetches: Cell<usize>,
    product_fetches: Cell<usize>,
}

impl FixtureSource {
    pub fn new(categories: Document, products: Document) -> Self {
        Self {
            categories,
            products,
            category_fetches: Cell::new(0),
            product_fetches: Cell::new(0),
        }
    }

    /// Serve the fixture categories and the given products
    pub fn serving(products: &[Product]) -> Self {
        Self::new(
            Document::json(&categories_document()),
            Document::json(&products),
        )
    }

    pub fn category_fetches(&self) -> usize {
        self.category_fetches.get()
    }

    pub fn product_fetches(&self) -> usize {
        self.product_fetches.get()
    }
}

#[async_trait(?Send)]
impl CatalogSource for FixtureSource {
    async fn fetch_categories(&self) -> Result<CategoriesDocument, LoadError> {
        self.category_fetches.set(self.category_fetches.get() + 1);
        self.categories.resolve("data/categories.json")
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, LoadError> {
        self.product_fetches.set(self.product_fetches.get() + 1);
        self.products.resolve("data/products.json")
    }
}

/// Products endpoint held open until the test releases it
pub struct GatedSource {
    products: RefCell<Option<oneshot::Receiver<Vec<Product>>>>,
}

impl GatedSource {
    /// The source plus the sender that releases its products response
    pub fn new() -> (Self, oneshot::Sender<Vec<Product>>) {
        let (release, products) = oneshot::channel();
        let source = Self {
            products: RefCell::new(Some(products)),
        };
        (source, release)
    }
}

#[async_trait(?Send)]
impl CatalogSource for GatedSource {
    async fn fetch_categories(&self) -> Result<CategoriesDocument, LoadError> {
        Document::Unreachable.resolve("data/categories.json")
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, LoadError> {
        let pending = self.products.borrow_mut().take();
        let Some(pending) = pending else {
            return Document::Unreachable.resolve("data/products.json");
        };
        pending.await.map_err(|_| LoadError::Request {
            url: "data/products.json".to_string(),
            message: "gate dropped".to_string(),
        })
    }
}
