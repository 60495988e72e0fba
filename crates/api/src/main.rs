use std::sync::Arc;

use anyhow::Context;

use travelease_api::app::{self, services::AppServices};
use travelease_infra::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    travelease_observability::init();

    let config = AppConfig::from_env().context("loading configuration")?;

    let services = Arc::new(
        AppServices::connect(&config)
            .await
            .context("connecting to MongoDB")?,
    );
    tracing::info!("MongoDB connected & routes ready");

    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("binding 0.0.0.0:{}", config.port))?;

    tracing::info!(port = config.port, "server running");

    axum::serve(listener, app).await.context("serving HTTP")?;
    Ok(())
}
