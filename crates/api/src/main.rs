use std::net::SocketAddr;
use std::sync::Arc;

use quandary_ai::AiClient;
use quandary_api::config::ServerConfig;
use quandary_api::engine::achievements;
use quandary_api::router::build_app_router;
use quandary_api::state::AppState;
use quandary_core::achievements::ACHIEVEMENT_CATALOG;
use quandary_core::dilemma::PREDEFINED_DILEMMAS;
use quandary_db::repositories::AchievementRepo;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// SQLite serializes writers; a handful of connections covers concurrent reads.
const MAX_DB_CONNECTIONS: u32 = 5;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "quandary_api=debug,quandary_ai=debug,quandary_db=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        database = %config.database_path.display(),
        "Loaded server configuration"
    );

    // --- Database ---
    let pool = quandary_db::create_pool(&config.database_path, MAX_DB_CONNECTIONS)
        .await
        .expect("Failed to open database");
    tracing::info!("Database connection pool created");

    quandary_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    quandary_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    let seeded = AchievementRepo::seed_catalog(&pool, &ACHIEVEMENT_CATALOG)
        .await
        .expect("Failed to seed achievement catalog");
    tracing::info!(seeded, "Achievement catalog ready");

    // --- Text providers ---
    let ai = AiClient::from_config(&config.ai)
        .expect("Failed to build HTTP client for text providers")
        .with_deadline(config.provider_deadline());
    tracing::info!(
        enabled = ai.is_enabled(),
        deadline_ms = config.provider_deadline().as_millis() as u64,
        providers = ?ai.provider_names(),
        predefined_dilemmas = PREDEFINED_DILEMMAS.len(),
        "Dilemma sources ready"
    );

    // --- Retroactive achievements ---
    match achievements::evaluate_all_players(&pool).await {
        Ok(0) => tracing::info!("No retroactive achievements to unlock"),
        Ok(total) => tracing::info!(total, "Retroactive achievements unlocked"),
        Err(e) => tracing::warn!(error = %e, "Retroactive achievement pass failed"),
    }

    // --- App state ---
    let state = AppState {
        pool: pool.clone(),
        ai: Arc::new(ai),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    pool.close().await;
    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
