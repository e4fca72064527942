#![allow(dead_code)]

use customer_service::config::{CustomerConfig, DatabaseConfig, StoreBackend};
use customer_service::models::Customer;
use customer_service::services::{CustomerRepository, CustomerStore};
use customer_service::startup::Application;
use secrecy::Secret;
use service_core::config::Config as CoreConfig;
use std::time::Duration;

/// A MongoDB address nothing listens on.
pub const UNREACHABLE_MONGODB_URL: &str = "mongodb://127.0.0.1:1/?connectTimeoutMS=200";

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: CustomerStore,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawns the service on a random port backed by a fresh in-memory store.
    pub async fn spawn() -> Self {
        Self::spawn_with(DatabaseConfig {
            backend: StoreBackend::Memory,
            url: None,
            name: Some("customer_test".to_string()),
            server_selection_timeout: Duration::from_millis(300),
        })
        .await
    }

    /// Spawns the service with MongoDB settings missing, so no store exists.
    pub async fn spawn_without_store() -> Self {
        Self::spawn_with(DatabaseConfig {
            backend: StoreBackend::MongoDb,
            url: None,
            name: None,
            server_selection_timeout: Duration::from_millis(300),
        })
        .await
    }

    /// Spawns the service against a MongoDB URL that refuses connections.
    pub async fn spawn_with_unreachable_mongodb() -> Self {
        Self::spawn_with(DatabaseConfig {
            backend: StoreBackend::MongoDb,
            url: Some(Secret::new(UNREACHABLE_MONGODB_URL.to_string())),
            name: Some("customer_test".to_string()),
            server_selection_timeout: Duration::from_millis(300),
        })
        .await
    }

    pub async fn spawn_with(database: DatabaseConfig) -> Self {
        let config = CustomerConfig {
            common: CoreConfig { port: 0 }, // Random port for testing
            database,
            otlp_endpoint: None,
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let store = app.store().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address,
            port,
            store,
            client: reqwest::Client::new(),
        }
    }

    pub fn repository(&self) -> &dyn CustomerRepository {
        self.store
            .get()
            .expect("test application was spawned without a store")
    }

    pub async fn insert(&self, customer: Customer) {
        self.repository()
            .insert_customer(&customer)
            .await
            .expect("Failed to insert customer");
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post(&self, path: &str) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn search(&self, query: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .get(format!("{}/api/customers/search", self.address))
            .query(query)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn seed(&self) -> serde_json::Value {
        let response = self.post("/api/customers/seed").await;
        assert_eq!(response.status().as_u16(), 200);
        response.json().await.expect("Failed to parse JSON")
    }
}
