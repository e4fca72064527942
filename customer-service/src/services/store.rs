use crate::config::{DatabaseConfig, StoreBackend};
use crate::models::Customer;
use crate::services::{CustomerFilter, InMemoryStore, MongoDb};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use service_core::error::AppError;
use std::sync::Arc;

/// Name of the collection holding customer records.
pub const CUSTOMER_COLLECTION: &str = "customer";

/// Message returned with 503 when no store handle exists.
pub const STORE_UNAVAILABLE: &str = "Database not available";

/// Operations the API layer needs from a document store.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn ping(&self) -> Result<(), AppError>;

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError>;

    /// Matching customers in natural storage order, at most `limit` of them.
    async fn find_customers(
        &self,
        filter: &CustomerFilter,
        limit: i64,
    ) -> Result<Vec<Customer>, AppError>;

    async fn find_one_by_email(&self, email: &str) -> Result<Option<Customer>, AppError>;

    async fn insert_customer(&self, customer: &Customer) -> Result<(), AppError>;

    async fn count_customers(&self, filter: &CustomerFilter) -> Result<u64, AppError>;
}

/// Process-wide handle to the customer store.
///
/// Built once at startup. When the store could not be set up the handle is
/// unavailable, and every storage-dependent handler answers 503 instead of
/// failing.
#[derive(Clone)]
pub struct CustomerStore {
    repository: Option<Arc<dyn CustomerRepository>>,
}

impl CustomerStore {
    pub fn available(repository: Arc<dyn CustomerRepository>) -> Self {
        Self {
            repository: Some(repository),
        }
    }

    pub fn unavailable() -> Self {
        Self { repository: None }
    }

    pub fn is_available(&self) -> bool {
        self.repository.is_some()
    }

    pub fn get(&self) -> Option<&dyn CustomerRepository> {
        self.repository.as_deref()
    }

    pub fn require(&self) -> Result<&dyn CustomerRepository, AppError> {
        self.get()
            .ok_or_else(|| AppError::ServiceUnavailable(STORE_UNAVAILABLE.to_string()))
    }

    /// Sets up the configured backend. Never fails: missing settings or a
    /// rejected connection string yield an unavailable handle.
    pub async fn connect(config: &DatabaseConfig) -> Self {
        match config.backend {
            StoreBackend::Memory => {
                tracing::info!("Using in-memory customer store");
                Self::available(Arc::new(InMemoryStore::new()))
            }
            StoreBackend::MongoDb => {
                let (Some(url), Some(name)) = (config.url.as_ref(), config.name.as_deref())
                else {
                    tracing::warn!(
                        url_set = config.url_configured(),
                        name_set = config.name_configured(),
                        "DATABASE_URL or DATABASE_NAME not set; customer endpoints will report 503"
                    );
                    return Self::unavailable();
                };

                match MongoDb::connect(url.expose_secret(), name, config.server_selection_timeout)
                    .await
                {
                    Ok(db) => {
                        if let Err(e) = db.initialize_indexes().await {
                            tracing::warn!("Failed to initialize customer indexes: {}", e);
                        }
                        Self::available(Arc::new(db))
                    }
                    Err(e) => {
                        tracing::error!("Failed to set up MongoDB client: {}", e);
                        Self::unavailable()
                    }
                }
            }
        }
    }
}
