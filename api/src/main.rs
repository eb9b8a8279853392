use std::sync::Arc;

use clap::Parser;
use pantry_chef_api::{
    application::{
        http::server::http_server::{router, state},
        telemetry::init_tracing,
    },
    args::Args,
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_tracing(&args.log)?;

    let app_state = state(args.clone())?;
    let router = router(app_state)?;

    let listener = TcpListener::bind((args.server.host.as_str(), args.server.port)).await?;
    info!("Pantry Chef API listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
