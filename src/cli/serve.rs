use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::api::{self, AppState};
use crate::cli::commands::ServeArgs;
use crate::cli::context::SolverContext;
use crate::errors::SolverError;

pub async fn handle_serve(args: ServeArgs, config_path: Option<&str>) -> Result<(), SolverError> {
    let ctx = SolverContext::load(config_path, &args.corpus).await?;
    let host = args.host.unwrap_or_else(|| ctx.config.host());
    let port = args.port.unwrap_or_else(|| ctx.config.port());
    info!(host = %host, port, entries = ctx.corpus.len(), "Starting API server");

    let state = AppState::new(Arc::new(ctx.corpus), ctx.threshold, ctx.limit);
    let app = api::build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown requested");
            signal_token.cancel();
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| SolverError::Internal(format!("Server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}
