// web_app/api/loader.rs - Catalog data loading
//
// Every load goes through a `CatalogSource`, so the same code runs against
// the HTTP endpoints in the browser and against in-memory documents in
// tests. Failures are reported to the log here, at the boundary, and then
// returned so the caller simply leaves its section unpopulated.

use async_trait::async_trait;

use crate::web_app::engine::{self, FilterOutcome, FilterState};
use crate::web_app::model::{CategoriesDocument, Category, Product};

/// Retrieval or parse failure of a static document
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("{url} is not a valid document: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid document URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("cannot determine page location: {0}")]
    Location(String),
}

impl LoadError {
    pub fn is_parse(&self) -> bool {
        matches!(self, LoadError::Parse { .. })
    }
}

/// Provider of the two static catalog documents
#[async_trait(?Send)]
pub trait CatalogSource {
    async fn fetch_categories(&self) -> Result<CategoriesDocument, LoadError>;

    async fn fetch_products(&self) -> Result<Vec<Product>, LoadError>;
}

/// Everything the catalog section needs to initialize
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogData {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

/// Fetch categories and products concurrently. Both must succeed; if
/// either fails nothing is returned.
pub async fn load_catalog_data<S>(source: &S) -> Result<CatalogData, LoadError>
where
    S: CatalogSource + ?Sized,
{
    let result = futures::try_join!(source.fetch_categories(), source.fetch_products());

    match result {
        Ok((document, products)) => {
            tracing::info!(
                categories = document.categories.len(),
                products = products.len(),
                "catalog data loaded"
            );
            Ok(CatalogData {
                categories: document.categories,
                products,
            })
        }
        Err(error) => {
            tracing::error!(%error, "error loading catalog data");
            Err(error)
        }
    }
}

/// Fetch products and keep the on-sale ones.
pub async fn load_sales_data<S>(source: &S) -> Result<Vec<Product>, LoadError>
where
    S: CatalogSource + ?Sized,
{
    match source.fetch_products().await {
        Ok(products) => {
            let sale = engine::on_sale(products);
            tracing::info!(products = sale.len(), "sales data loaded");
            Ok(sale)
        }
        Err(error) => {
            tracing::error!(%error, "error loading sales data");
            Err(error)
        }
    }
}

/// Re-fetch the full product collection and run one filter pass over it.
///
/// Nothing is cached: each call goes back to the source, so the result is
/// always computed from the unfiltered collection.
pub async fn filter_products<S>(source: &S, state: FilterState) -> Result<FilterOutcome, LoadError>
where
    S: CatalogSource + ?Sized,
{
    match source.fetch_products().await {
        Ok(products) => Ok(engine::run(products, state)),
        Err(error) => {
            tracing::error!(%error, "error filtering products");
            Err(error)
        }
    }
}
