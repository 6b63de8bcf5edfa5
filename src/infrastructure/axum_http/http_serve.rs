use crate::{
    config::config_model::DotEnvyConfig,
    infrastructure::{
        axum_http::{default_routers, routers},
        sqlite::sqlite_connection::SqlitePoolSquad,
    },
};
use anyhow::{Context, Result};
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::{error, info};

pub fn app(config: &DotEnvyConfig, db_pool: Arc<SqlitePoolSquad>) -> Result<Router> {
    let body_limit = config
        .server
        .body_limit
        .checked_mul(1024 * 1024)
        .and_then(|bytes| usize::try_from(bytes).ok())
        .context("SERVER_BODY_LIMIT is too large")?;

    let app = Router::new()
        .fallback(default_routers::not_found)
        .nest(
            "/api/v1/parcels",
            routers::parcels::routes(Arc::clone(&db_pool)),
        )
        .merge(routers::pages::routes(Arc::clone(&db_pool)))
        .route("/api/v1/health-check", get(default_routers::health_check))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([CONTENT_TYPE])
                .allow_origin(Any),
        );

    let app = if config.stage.logs_requests() {
        app.layer(TraceLayer::new_for_http())
    } else {
        app
    };

    Ok(app)
}

pub async fn start(config: Arc<DotEnvyConfig>, db_pool: Arc<SqlitePoolSquad>) -> Result<()> {
    let app = app(&config, db_pool)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr).await?;

    info!("Server is running on port {}", config.server.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = ?err, "Failed to install CTRL+C signal handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = ?err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}
