use crate::config::{GuestbookConfig, StoreBackend};
use crate::handlers;
use crate::services::{InMemoryNameStore, MongoNameStore, NameStore};
use axum::{middleware::from_fn, routing::get, Router};
use service_core::error::AppError;
use service_core::middleware::{metrics_middleware, request_id_middleware, RequestSpan};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn NameStore>,
}

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/names",
            get(handlers::list_names).post(handlers::add_name),
        );

    Router::new()
        .nest("/api", api)
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(RequestSpan))
        // Outside the trace layer so spans see the request id
        .layer(from_fn(request_id_middleware))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
    store: Arc<dyn NameStore>,
}

impl Application {
    pub async fn build(config: GuestbookConfig) -> Result<Self, AppError> {
        let store: Arc<dyn NameStore> = match config.store.backend {
            StoreBackend::Mongo => {
                let db = MongoNameStore::connect(&config.mongodb)
                    .await
                    .map_err(|e| {
                        tracing::error!("Failed to connect to MongoDB: {}", e);
                        e
                    })?;
                db.initialize_indexes().await.map_err(|e| {
                    tracing::error!("Failed to initialize database indexes: {}", e);
                    e
                })?;
                Arc::new(db)
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory store; entries will not survive a restart");
                Arc::new(InMemoryNameStore::new())
            }
        };

        Self::build_with_store(config, store).await
    }

    /// Wire the server around an already constructed store.
    pub async fn build_with_store(
        config: GuestbookConfig,
        store: Arc<dyn NameStore>,
    ) -> Result<Self, AppError> {
        let router = build_router(AppState {
            store: store.clone(),
        });

        let address = config.common.bind_address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        Ok(Self {
            port,
            listener,
            router,
            store,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn store(&self) -> Arc<dyn NameStore> {
        self.store.clone()
    }

    /// Serve until Ctrl+C or SIGTERM, then drain and release the store.
    pub async fn run_until_stopped(self) -> Result<(), AppError> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        self.store.shutdown().await;
        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
