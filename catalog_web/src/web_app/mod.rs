// web_app/mod.rs - Root module for the catalog front end
//
// Architecture:
// - model/: Catalog data types and control value parsing
// - config.rs: Catalog and static server configuration
// - engine/: Filter state, filtering and pagination (pure)
// - navigation.rs: Section switching and the loads it triggers
// - api/: Catalog document loading
// - view_model.rs: Display-ready values derived from the data
// - diagnostics.rs: Logging setup and user action reporting
// - components/, pages/, app.rs: Leptos UI (csr only)

pub mod api;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod model;
pub mod navigation;
pub mod view_model;

#[cfg(feature = "csr")]
pub mod components;

#[cfg(feature = "csr")]
pub mod pages;

#[cfg(feature = "csr")]
pub mod app;

// Re-export main app component for convenience
#[cfg(feature = "csr")]
pub use app::App;
