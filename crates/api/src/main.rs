use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use formular_api::config::ServerConfig;
use formular_api::router::build_app_router;
use formular_api::state::AppState;
use formular_api::store::{MemorySubmissionStore, PgSubmissionStore, SubmissionStore};
use formular_core::catalogue::FieldCatalogue;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "formular_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Field catalogue ---
    let catalogue = match &config.fields_path {
        Some(path) => {
            let catalogue =
                FieldCatalogue::from_json_file(path).expect("Failed to load FORM_FIELDS_PATH");
            tracing::info!(path = %path.display(), fields = catalogue.fields().len(), "Loaded field list");
            catalogue
        }
        None => {
            tracing::info!("FORM_FIELDS_PATH not set, serving built-in field list");
            FieldCatalogue::default()
        }
    };

    // --- Submission store ---
    let submissions: Arc<dyn SubmissionStore> = match &config.database_url {
        Some(database_url) => {
            let pool = formular_db::create_pool(database_url)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            formular_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            Arc::new(PgSubmissionStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, submissions are kept in memory");
            Arc::new(MemorySubmissionStore::new())
        }
    };

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        catalogue: Arc::new(catalogue),
        submissions,
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

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT or (on Unix) SIGTERM.
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
