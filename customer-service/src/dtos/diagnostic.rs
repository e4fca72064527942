use serde::{Serialize, Serializer};
use std::fmt;

/// Longest error excerpt echoed by the diagnostic endpoint.
pub const ERROR_EXCERPT_CHARS: usize = 50;

/// Maximum number of collection names listed.
pub const MAX_LISTED_COLLECTIONS: usize = 10;

/// Body of `GET /test`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DiagnosticResponse {
    pub backend: BackendStatus,
    pub database: DatabaseStatus,
    pub database_url: ConfigPresence,
    pub database_name: ConfigPresence,
    pub connection_status: ConnectionStatus,
    pub collections: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum BackendStatus {
    #[serde(rename = "✅ Running")]
    Running,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ConfigPresence {
    #[serde(rename = "✅ Set")]
    Set,
    #[serde(rename = "❌ Not Set")]
    NotSet,
}

impl From<bool> for ConfigPresence {
    fn from(present: bool) -> Self {
        if present {
            ConfigPresence::Set
        } else {
            ConfigPresence::NotSet
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    #[serde(rename = "Not Connected")]
    NotConnected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseStatus {
    /// Handle exists and listing collections succeeded.
    Working,
    /// Handle exists but the listing failed; carries a truncated message.
    Error(String),
    /// No handle was built at startup.
    NotInitialized,
}

impl DatabaseStatus {
    pub fn error(message: impl fmt::Display) -> Self {
        DatabaseStatus::Error(
            message
                .to_string()
                .chars()
                .take(ERROR_EXCERPT_CHARS)
                .collect(),
        )
    }
}

impl fmt::Display for DatabaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseStatus::Working => write!(f, "✅ Connected & Working"),
            DatabaseStatus::Error(message) => write!(f, "⚠️  Connected but Error: {}", message),
            DatabaseStatus::NotInitialized => write!(f, "⚠️  Available but not initialized"),
        }
    }
}

impl Serialize for DatabaseStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_to_legacy_status_strings() {
        let response = DiagnosticResponse {
            backend: BackendStatus::Running,
            database: DatabaseStatus::Working,
            database_url: ConfigPresence::Set,
            database_name: ConfigPresence::NotSet,
            connection_status: ConnectionStatus::Connected,
            collections: vec!["customer".to_string()],
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "backend": "✅ Running",
                "database": "✅ Connected & Working",
                "database_url": "✅ Set",
                "database_name": "❌ Not Set",
                "connection_status": "Connected",
                "collections": ["customer"],
            })
        );
    }

    #[test]
    fn error_messages_are_truncated_to_fifty_characters() {
        let status = DatabaseStatus::error("x".repeat(80));
        assert_eq!(status, DatabaseStatus::Error("x".repeat(50)));

        let short = DatabaseStatus::error("timed out");
        assert_eq!(short.to_string(), "⚠️  Connected but Error: timed out");
    }

    #[test]
    fn truncation_respects_character_boundaries() {
        let status = DatabaseStatus::error("é".repeat(60));
        assert_eq!(status, DatabaseStatus::Error("é".repeat(50)));
    }

    #[test]
    fn not_initialized_and_not_connected_strings() {
        assert_eq!(
            serde_json::to_value(DatabaseStatus::NotInitialized).unwrap(),
            json!("⚠️  Available but not initialized")
        );
        assert_eq!(
            serde_json::to_value(ConnectionStatus::NotConnected).unwrap(),
            json!("Not Connected")
        );
        assert_eq!(ConfigPresence::from(false), ConfigPresence::NotSet);
    }
}
