// web_app/pages/mod.rs - Page components module
//
// One component per page section:
// - HomePage: landing section
// - CatalogPage: filterable, paginated product catalog
// - SalesPage: on-sale products

pub mod catalog;
pub mod home;
pub mod sales;

pub use catalog::CatalogPage;
pub use home::HomePage;
pub use sales::SalesPage;
