use crate::models::Customer;
use crate::services::store::{CustomerRepository, CUSTOMER_COLLECTION};
use crate::services::CustomerFilter;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{ClientOptions, FindOptions, IndexOptions},
    Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;
use std::time::Duration;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    /// Builds the client. The driver connects lazily, so this only fails on
    /// a malformed connection string; reachability shows up on first use.
    pub async fn connect(
        uri: &str,
        database: &str,
        server_selection_timeout: Duration,
    ) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let mut options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB connection string: {}", e);
            AppError::from(e)
        })?;
        options.app_name = Some("customer-service".to_string());
        options.server_selection_timeout = Some(server_selection_timeout);

        let client = MongoClient::with_options(options)?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for customer-service");

        // Seeding looks customers up by email; not unique because external
        // inserts may legitimately share or omit one.
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .name("email_lookup".to_string())
                    .build(),
            )
            .build();

        self.customers()
            .create_index(email_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create email index on customer collection: {}", e);
                AppError::from(e)
            })?;
        tracing::info!("Created index on customer.email");

        Ok(())
    }

    pub fn customers(&self) -> Collection<Customer> {
        self.db.collection(CUSTOMER_COLLECTION)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl CustomerRepository for MongoDb {
    async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        Ok(self.db.list_collection_names(None).await?)
    }

    async fn find_customers(
        &self,
        filter: &CustomerFilter,
        limit: i64,
    ) -> Result<Vec<Customer>, AppError> {
        let options = FindOptions::builder().limit(limit).build();
        let cursor = self
            .customers()
            .find(filter.to_document(), options)
            .await
            .map_err(AppError::from)?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_one_by_email(&self, email: &str) -> Result<Option<Customer>, AppError> {
        Ok(self
            .customers()
            .find_one(CustomerFilter::email(email).to_document(), None)
            .await?)
    }

    async fn insert_customer(&self, customer: &Customer) -> Result<(), AppError> {
        self.customers()
            .insert_one(customer, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert customer into database: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn count_customers(&self, filter: &CustomerFilter) -> Result<u64, AppError> {
        Ok(self
            .customers()
            .count_documents(filter.to_document(), None)
            .await?)
    }
}
