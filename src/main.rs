use anyhow::Result;
use tracing::info;
use translation_catalog::config::Config;
use translation_catalog::context::AppContext;
use translation_catalog::server;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("translation_catalog=info".parse()?),
        )
        .init();

    info!("Starting translation catalog");

    let config = Config::from_env()?;
    let context = AppContext::init(&config).await?;

    info!(
        "Catalog ready: {} classes, {} translations",
        context.registry.len(),
        context.store.count().await?
    );

    server::serve(context, config.port).await
}
