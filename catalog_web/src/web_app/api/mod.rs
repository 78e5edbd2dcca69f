// web_app/api/mod.rs - Data loading
//
// - loader.rs: CatalogSource trait and the catalog / sales / filter loads
// - http.rs: HttpSource, the CatalogSource for the static JSON endpoints

pub mod http;
pub mod loader;

pub use http::HttpSource;
pub use loader::{
    filter_products, load_catalog_data, load_sales_data, CatalogData, CatalogSource, LoadError,
};
