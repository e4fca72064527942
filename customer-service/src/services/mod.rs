pub mod database;
pub mod filter;
pub mod memory;
pub mod metrics;
pub mod seed;
pub mod store;

pub use database::MongoDb;
pub use filter::{CustomerFilter, SEARCHABLE_FIELDS};
pub use memory::InMemoryStore;
pub use metrics::{get_metrics, init_metrics};
pub use seed::{sample_customers, seed_customers, SeedOutcome};
pub use store::{CustomerRepository, CustomerStore, CUSTOMER_COLLECTION, STORE_UNAVAILABLE};
