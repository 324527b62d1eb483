use anyhow::Result;
use festival_hub::config::Config;
use festival_hub::content::ContentRegistry;
use festival_hub::server::{self, AppState};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("festival_hub=info".parse()?),
        )
        .init();

    info!("Starting festival hub server");

    // Load configuration from environment
    let config = Arc::new(Config::from_env()?);

    // Load all localized content bundles up front; resolution is a pure
    // lookup after this point
    let registry = Arc::new(ContentRegistry::load(Path::new(&config.content_dir))?);

    let addr = format!("0.0.0.0:{}", config.port);
    let app = server::router(AppState::new(config, registry));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
