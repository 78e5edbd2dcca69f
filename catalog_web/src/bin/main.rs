// Catalog static file server
//
// This binary serves the built front end with:
// - Actix-web for HTTP serving
// - actix-files for the site root (index.html, pkg/, data/)
// - Address and site root taken from the environment (.env honored)

#[cfg(feature = "server")]
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    use actix_files::Files;
    use actix_web::{middleware::Logger, App, HttpServer};
    use anyhow::Context;
    use catalog_web::web_app::config::ServerConfig;
    use tracing_subscriber::EnvFilter;

    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env().context("invalid server configuration")?;
    let site_root = config.site_root.clone();

    if !site_root.join("index.html").is_file() {
        tracing::warn!(site_root = %site_root.display(), "site root has no index.html");
    }

    tracing::info!("Serving {} at http://{}", site_root.display(), config.addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(Files::new("/", site_root.clone()).index_file("index.html"))
    })
    .bind(config.addr)
    .with_context(|| format!("cannot bind {}", config.addr))?
    .run()
    .await
    .context("server terminated abnormally")
}

#[cfg(not(feature = "server"))]
fn main() {
    panic!("This binary requires the 'server' feature. Run with: cargo run --features server");
}
