use anyhow::{Context, Result};
use benchlink_site::config::Config;
use benchlink_site::context::SiteContext;
use benchlink_site::i18n::{CatalogCache, CatalogLoader};
use benchlink_site::server::{self, AppState};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("benchlink_site=info".parse()?),
        )
        .init();

    info!("Starting BenchLink+ site service");

    let config = Config::from_env()?;
    let ctx = SiteContext::from_config(&config);
    info!(
        "Serving {} locales for {} (default: {})",
        ctx.registry.len(),
        ctx.base_url,
        ctx.registry.default_locale()
    );

    // Refuse to start with a missing or malformed catalog
    let catalogs = CatalogCache::new(CatalogLoader::from_config(&config));
    catalogs
        .preload(&ctx.registry)
        .await
        .context("Message catalogs failed to load")?;

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    let app = server::router(AppState::new(config, ctx, catalogs));
    axum::serve(listener, app).await?;

    Ok(())
}
