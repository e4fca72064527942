use crate::services::get_metrics;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness check. A missing store is reported as degraded, not unhealthy,
/// because the non-storage endpoints still work.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let Some(store) = state.store.get() else {
        return (
            StatusCode::OK,
            Json(json!({
                "status": "degraded",
                "service": "customer-service",
                "version": env!("CARGO_PKG_VERSION"),
                "database": "unavailable"
            })),
        );
    };

    match store.ping().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "service": "customer-service",
                "version": env!("CARGO_PKG_VERSION")
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "unhealthy",
                "service": "customer-service",
                "error": e.to_string()
            })),
        ),
    }
}

/// Readiness check: ready only when the store answers a ping.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.get() {
        Some(store) => match store.ping().await {
            Ok(_) => StatusCode::OK,
            Err(_) => StatusCode::SERVICE_UNAVAILABLE,
        },
        None => StatusCode::SERVICE_UNAVAILABLE,
    }
}

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
