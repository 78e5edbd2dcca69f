// web_app/api/http.rs - Static documents over HTTP GET
//
// Plain GET requests, no headers and no auth. The body is read as text and
// parsed separately so a malformed document surfaces as `LoadError::Parse`
// rather than as a transport error.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use super::loader::{CatalogSource, LoadError};
use crate::web_app::config::CatalogConfig;
use crate::web_app::model::{CategoriesDocument, Product};

/// `CatalogSource` backed by the static JSON endpoints
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpSource {
    categories_url: Url,
    products_url: Url,
}

impl HttpSource {
    /// Resolve the configured document paths against `base` (the page URL).
    pub fn new(base: &Url, config: &CatalogConfig) -> Result<Self, LoadError> {
        Ok(Self {
            categories_url: base.join(&config.categories_path)?,
            products_url: base.join(&config.products_path)?,
        })
    }

    /// Resolve against the current page location.
    #[cfg(feature = "csr")]
    pub fn from_window(config: &CatalogConfig) -> Result<Self, LoadError> {
        let window = web_sys::window()
            .ok_or_else(|| LoadError::Location("no window object".to_string()))?;
        let href = window
            .location()
            .href()
            .map_err(|error| LoadError::Location(format!("{:?}", error)))?;
        let base = Url::parse(&href)?;
        Self::new(&base, config)
    }

    pub fn categories_url(&self) -> &Url {
        &self.categories_url
    }

    pub fn products_url(&self) -> &Url {
        &self.products_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, LoadError> {
        tracing::debug!(%url, "fetching document");

        let response = reqwest::get(url.clone())
            .await
            .map_err(|error| LoadError::Request {
                url: url.to_string(),
                message: error.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|error| LoadError::Request {
            url: url.to_string(),
            message: error.to_string(),
        })?;

        serde_json::from_str(&body).map_err(|source| LoadError::Parse {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpSource {
    async fn fetch_categories(&self) -> Result<CategoriesDocument, LoadError> {
        self.get_json(&self.categories_url).await
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, LoadError> {
        self.get_json(&self.products_url).await
    }
}
