mod config;
mod routes;

use std::sync::Arc;

use leptos::prelude::get_configuration;

use crate::config::{ConfigError, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env is fine; the environment may already be set.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    leptos_options.site_addr = config.addr();
    if let Some(root) = &config.site_root {
        leptos_options.site_root = Arc::from(root.to_string_lossy().as_ref());
    }

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;

    tracing::info!(port = config.port, site_root = ?config.site_root, "storefront listening");
    axum::serve(listener, app).await?;
    Ok(())
}
