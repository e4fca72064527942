use crate::dtos::diagnostic::MAX_LISTED_COLLECTIONS;
use crate::dtos::{
    BackendStatus, ConfigPresence, ConnectionStatus, DatabaseStatus, DiagnosticResponse,
};
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;

/// `GET /test`
///
/// Reports backend, store and configuration status. Always answers 200;
/// store failures are folded into the status fields.
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticResponse> {
    let (database, connection_status, collections) = match state.store.get() {
        Some(store) => match store.list_collection_names().await {
            Ok(mut names) => {
                names.truncate(MAX_LISTED_COLLECTIONS);
                (DatabaseStatus::Working, ConnectionStatus::Connected, names)
            }
            Err(e) => {
                tracing::warn!("Diagnostic collection listing failed: {}", e);
                (
                    DatabaseStatus::error(root_cause(&e)),
                    ConnectionStatus::NotConnected,
                    Vec::new(),
                )
            }
        },
        None => (
            DatabaseStatus::NotInitialized,
            ConnectionStatus::NotConnected,
            Vec::new(),
        ),
    };

    let db_config = &state.config.database;

    Json(DiagnosticResponse {
        backend: BackendStatus::Running,
        database,
        database_url: ConfigPresence::from(db_config.url_configured()),
        database_name: ConfigPresence::from(db_config.name_configured()),
        connection_status,
        collections,
    })
}

/// Driver message without the `AppError` variant prefix.
fn root_cause(err: &AppError) -> String {
    match err {
        AppError::DatabaseError(inner) | AppError::InternalError(inner) => inner.to_string(),
        other => other.to_string(),
    }
}
