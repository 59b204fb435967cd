use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atelier_api::config::{BackendConfig, ServerConfig, StorageConfig};
use atelier_api::{auth, router, state};
use atelier_gallery::GalleryService;
use atelier_storage::{LocalObjectStore, ObjectStore, S3ObjectStore};

use auth::session::SessionStore;
use state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atelier_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Gallery backend (or fallback mode) ---
    let gallery = match BackendConfig::from_env() {
        Some(backend) => {
            let pool = atelier_db::create_pool(&backend.database_url)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            atelier_db::health_check(&pool)
                .await
                .expect("Database health check failed");
            tracing::info!("Database health check passed");

            atelier_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            let store = build_object_store(backend.storage).await;
            tracing::info!("Gallery backend configured");

            GalleryService::configured(pool, store)
        }
        None => {
            tracing::warn!(
                "Gallery backend not configured, serving the bundled catalog (writes disabled)"
            );
            GalleryService::fallback()
        }
    };

    // --- App state ---
    let state = AppState {
        gallery: Arc::new(gallery),
        config: Arc::new(config.clone()),
        sessions: Arc::new(SessionStore::new()),
    };

    // --- Router ---
    let app = router::build_app_router(state, &config);

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

/// Build the configured object store provider.
async fn build_object_store(config: StorageConfig) -> Arc<dyn ObjectStore> {
    match config {
        StorageConfig::S3 {
            bucket,
            region,
            endpoint,
            public_base_url,
        } => {
            tracing::info!(%bucket, %region, "Using S3 object storage");
            Arc::new(S3ObjectStore::connect(bucket, region, endpoint, public_base_url).await)
        }
        StorageConfig::Local {
            root,
            public_base_url,
        } => {
            tracing::info!(root = %root.display(), "Using local object storage");
            Arc::new(LocalObjectStore::new(root, public_base_url))
        }
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
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
