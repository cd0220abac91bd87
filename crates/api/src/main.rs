use anyhow::Context;

use stagepass_api::app::{self, services::ServiceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stagepass_observability::init();

    let config = ServiceConfig::from_env();
    let app = app::build_app(config).await;

    let addr = std::env::var("STAGEPASS_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
