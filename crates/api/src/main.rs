use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use inventory_api::config::ServerConfig;
use inventory_api::router::build_app_router;
use inventory_api::state::AppState;
use inventory_db::catalog::Catalog;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "inventory_api=debug,inventory_db=info,tower_http=debug".into());
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);
    if json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // --- Configuration ---
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid server configuration");
            std::process::exit(1);
        }
    };
    tracing::info!(addr = %config.bind_addr, "Loaded server configuration");

    // --- Database ---
    let pool = inventory_db::create_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("Failed to open database");
    tracing::info!(url = %config.database_url, "Database connection pool created");

    inventory_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    inventory_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    inventory_db::seed::bootstrap(&pool)
        .await
        .expect("Failed to seed bootstrap data");

    // --- App state ---
    let state = AppState::new(Catalog::new(pool.clone()), config.clone());
    let app = build_app_router(state, &config);

    // --- Start server ---
    tracing::info!(addr = %config.bind_addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    pool.close().await;
    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT or SIGTERM.
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
