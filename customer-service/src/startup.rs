//! Application startup and lifecycle management.

use crate::config::CustomerConfig;
use crate::handlers;
use crate::services::CustomerStore;
use axum::{
    body::Body,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::tracing::make_request_span;
use service_core::middleware::{metrics_middleware, request_id_middleware};
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: CustomerConfig,
    pub store: CustomerStore,
}

/// Full HTTP surface of the service.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/hello", get(handlers::hello))
        .route("/test", get(handlers::diagnostics))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route("/api/customers/search", get(handlers::search_customers))
        .route("/api/customers/seed", post(handlers::seed_customers))
        .layer(from_fn(metrics_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
        // Any origin, method and header; credentials allowed by mirroring the origin.
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
    state: AppState,
}

impl Application {
    pub async fn build(config: CustomerConfig) -> Result<Self, AppError> {
        let store = CustomerStore::connect(&config.database).await;
        Self::build_with_store(config, store).await
    }

    /// Builds the application around an already constructed store handle.
    pub async fn build_with_store(
        config: CustomerConfig,
        store: CustomerStore,
    ) -> Result<Self, AppError> {
        if !store.is_available() {
            tracing::warn!("Customer store unavailable; storage endpoints will answer 503");
        }

        let state = AppState {
            config: config.clone(),
            store,
        };
        let router = router(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        Ok(Self {
            port,
            listener,
            router,
            state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn store(&self) -> &CustomerStore {
        &self.state.store
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router).await
    }

    pub async fn run_with_shutdown<F>(self, signal: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(signal)
            .await
    }
}
