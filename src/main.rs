use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod auth;
mod config;
mod db;
mod dto;
mod error;
mod handlers;
mod models;
mod services;
mod store;
#[cfg(test)]
mod test_utils;

use config::Config;
use store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub config: Arc<Config>,
}

pub fn app_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz));

    let protected_routes = Router::new()
        // Dashboard
        .route("/api/dashboard/summary", get(handlers::dashboard::get_summary))
        .route("/api/dashboard/trends", get(handlers::dashboard::get_trends))
        .route("/api/dashboard/streaks", get(handlers::dashboard::get_streaks))
        .route("/api/dashboard/alerts", get(handlers::dashboard::get_alerts))
        .route("/api/dashboard/monthly", get(handlers::dashboard::get_monthly))
        // Daily logs
        .route("/api/logs", post(handlers::daily_logs::upsert_daily_log))
        .route("/api/logs", get(handlers::daily_logs::list_daily_logs))
        .route("/api/logs/today", get(handlers::daily_logs::get_today_log))
        .route("/api/logs/:date", delete(handlers::daily_logs::delete_daily_log))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::require_auth,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    // Unparseable origins are skipped rather than failing startup
    let allowed_origins: Vec<HeaderValue> = std::iter::once(&config.frontend_url)
        .chain(config.cors_extra_origins.iter())
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(hv) => Some(hv),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fitlog_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Arc::new(Config::from_env());

    // Database
    let db = db::create_pool(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&db)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations applied");

    let store: Arc<dyn Store> = Arc::new(db::PgStore::new(db));

    if config.metrics_worker_enabled {
        services::refresher::spawn_monthly_metrics_worker(
            store.clone(),
            config.metrics_worker_interval_secs,
        );
        tracing::info!(
            interval_secs = config.metrics_worker_interval_secs,
            "Monthly metrics worker started"
        );
    }

    let state = AppState {
        store,
        config: config.clone(),
    };

    let app = app_router(state)
        .layer(cors_layer(&config))
        .layer(TraceLayer::new_for_http());

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
