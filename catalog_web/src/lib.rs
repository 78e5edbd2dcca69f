// lib.rs - Root module for the catalog_web library
//
// The library holds the catalog logic (always compiled, so it can be tested
// natively) and the Leptos front end behind the `csr` feature. Built for
// wasm32 with `csr`, the module start hook mounts the app.

pub mod web_app;

/// Browser entry point
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;
    use web_app::api::HttpSource;
    use web_app::config::CatalogConfig;
    use web_app::App;

    console_error_panic_hook::set_once();
    web_app::diagnostics::init();

    let config = CatalogConfig::default();
    if let Err(error) = config.validate() {
        tracing::error!(%error, "invalid catalog configuration");
        return;
    }

    match HttpSource::from_window(&config) {
        Ok(source) => {
            leptos::mount::mount_to_body(move || view! { <App source=source config=config /> });
        }
        Err(error) => tracing::error!(%error, "cannot resolve catalog data locations"),
    }
}
