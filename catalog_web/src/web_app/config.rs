// web_app/config.rs - Catalog and server configuration
//
// `CatalogConfig` is compiled into the WASM app (there is no config file or
// environment in the browser). `ServerConfig` is read from the environment
// by the static server binary.

use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(24) {
    Some(size) => size,
    None => panic!("default page size must be non-zero"),
};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_SITE_ROOT: &str = "target/site";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid listen address {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("default page size {0} is not one of the page size options")]
    UnknownDefaultPageSize(NonZeroUsize),

    #[error("price range is empty: min {min} is not below max {max}")]
    EmptyPriceRange { min: Decimal, max: Decimal },

    #[error("default price ceiling {0} is outside the price range")]
    DefaultCeilingOutOfRange(Decimal),
}

/// Bounds of the price range control
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceRangeConfig {
    pub min: Decimal,
    pub max: Decimal,
    pub step: Decimal,
    /// Initial control value, i.e. the starting price ceiling
    pub default_ceiling: Decimal,
}

impl Default for PriceRangeConfig {
    fn default() -> Self {
        Self {
            min: Decimal::ZERO,
            max: Decimal::new(1000, 0),
            step: Decimal::ONE,
            default_ceiling: Decimal::new(1000, 0),
        }
    }
}

/// Settings for the catalog front end
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Categories document, relative to the page URL
    pub categories_path: String,
    /// Products document, relative to the page URL
    pub products_path: String,
    pub default_page_size: NonZeroUsize,
    pub page_size_options: Vec<NonZeroUsize>,
    pub price_range: PriceRangeConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            categories_path: "data/categories.json".to_string(),
            products_path: "data/products.json".to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: [12, 24, 48, 96]
                .into_iter()
                .filter_map(NonZeroUsize::new)
                .collect(),
            price_range: PriceRangeConfig::default(),
        }
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.page_size_options.contains(&self.default_page_size) {
            return Err(ConfigError::UnknownDefaultPageSize(self.default_page_size));
        }
        if self.price_range.min >= self.price_range.max {
            return Err(ConfigError::EmptyPriceRange {
                min: self.price_range.min,
                max: self.price_range.max,
            });
        }
        let ceiling = self.price_range.default_ceiling;
        if ceiling < self.price_range.min || ceiling > self.price_range.max {
            return Err(ConfigError::DefaultCeilingOutOfRange(ceiling));
        }
        Ok(())
    }
}

/// Static server settings
///
/// - `CATALOG_ADDR`: listen address (default `127.0.0.1:3000`)
/// - `CATALOG_SITE_ROOT`: directory holding `index.html`, `pkg/` and `data/`
///   (default `target/site`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub site_root: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (lets tests avoid touching the
    /// process environment).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr_value = lookup("CATALOG_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                value: addr_value.clone(),
                source,
            })?;

        let site_root = lookup("CATALOG_SITE_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SITE_ROOT));

        Ok(Self { addr, site_root })
    }
}
