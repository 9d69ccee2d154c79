use anyhow::Context;
use axum::{
    handler::Handler,
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, DEFAULT_SECRET_KEY};
use crate::database::DatabaseManager;
use crate::handlers;
use crate::middleware::{authenticate_jwt, ensure_admin};
use crate::state::AppState;

/// Build the full router: routes, per-route gates, then global middleware
pub fn app(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(handlers::health))
        .merge(job_routes())
        .fallback(handlers::not_found)
        .layer(from_fn_with_state(state.clone(), authenticate_jwt));

    // Global middleware; later layers wrap earlier ones
    if state.config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }
    if state.config.security.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }

    router.with_state(state)
}

fn job_routes() -> Router<AppState> {
    use handlers::jobs;

    Router::new()
        .route(
            "/jobs",
            get(jobs::job_list).post(jobs::job_create.layer(from_fn(ensure_admin))),
        )
        .route(
            "/jobs/:id",
            get(jobs::job_get)
                .patch(jobs::job_patch.layer(from_fn(ensure_admin)))
                .delete(jobs::job_delete.layer(from_fn(ensure_admin))),
        )
}

/// Run the API server until Ctrl-C
pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let port = config.api.port;
    if config.is_production() && config.security.secret_key == DEFAULT_SECRET_KEY {
        tracing::warn!("SECRET_KEY is unset; tokens are signed with the development key");
    }
    let state = AppState::lazy(config)?;
    let pool = state.pool.clone();

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Jobly API listening on http://{}", bind_addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    DatabaseManager::close(&pool).await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}

/// Log to stdout, filtered by `RUST_LOG` (default `info`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
