use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct CustomerConfig {
    pub common: core_config::Config,
    pub database: DatabaseConfig,
    /// `OTLP_ENDPOINT`. Traces are exported only when this is set.
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub backend: StoreBackend,
    /// `DATABASE_URL`. An empty value counts as unset.
    pub url: Option<Secret<String>>,
    /// `DATABASE_NAME`. An empty value counts as unset.
    pub name: Option<String>,
    pub server_selection_timeout: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    MongoDb,
    Memory,
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(StoreBackend::MongoDb),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(format!("Invalid database backend: {}", s)),
        }
    }
}

impl DatabaseConfig {
    pub fn url_configured(&self) -> bool {
        self.url.is_some()
    }

    pub fn name_configured(&self) -> bool {
        self.name.is_some()
    }
}

impl CustomerConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env, APP__ prefix and PORT)
        let common_config = core_config::Config::load()?;
        Self::from_lookup(common_config, |key| env::var(key).ok())
    }

    /// Builds the service config from a variable lookup, so callers and tests
    /// can supply values without touching the process environment.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let backend = match get("DATABASE_BACKEND") {
            Some(value) => value
                .parse()
                .map_err(|e: String| AppError::ConfigError(anyhow::anyhow!(e)))?,
            None => StoreBackend::MongoDb,
        };

        let timeout_ms = match get("DATABASE_TIMEOUT_MS") {
            Some(value) => value.parse::<u64>().map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!(
                    "DATABASE_TIMEOUT_MS must be a number of milliseconds: {}",
                    e
                ))
            })?,
            None => 5000,
        };

        Ok(CustomerConfig {
            common,
            database: DatabaseConfig {
                backend,
                url: get("DATABASE_URL").map(Secret::new),
                name: get("DATABASE_NAME"),
                server_selection_timeout: Duration::from_millis(timeout_ms),
            },
            otlp_endpoint: get("OTLP_ENDPOINT"),
        })
    }
}
