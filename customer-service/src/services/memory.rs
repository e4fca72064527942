use crate::models::Customer;
use crate::services::store::{CustomerRepository, CUSTOMER_COLLECTION};
use crate::services::CustomerFilter;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson};
use service_core::error::AppError;
use tokio::sync::RwLock;

/// Process-local customer store with the same filter semantics as MongoDB.
///
/// Records keep insertion order, which stands in for natural storage order.
#[derive(Default)]
pub struct InMemoryStore {
    customers: RwLock<Vec<Customer>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        // Like MongoDB, the collection exists once something was written to it.
        if self.customers.read().await.is_empty() {
            Ok(Vec::new())
        } else {
            Ok(vec![CUSTOMER_COLLECTION.to_string()])
        }
    }

    async fn find_customers(
        &self,
        filter: &CustomerFilter,
        limit: i64,
    ) -> Result<Vec<Customer>, AppError> {
        // MongoDB treats a zero limit as "no limit" and a negative one as its absolute value.
        let limit = match limit.unsigned_abs() {
            0 => usize::MAX,
            n => usize::try_from(n).unwrap_or(usize::MAX),
        };

        Ok(self
            .customers
            .read()
            .await
            .iter()
            .filter(|customer| filter.matches(customer))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_one_by_email(&self, email: &str) -> Result<Option<Customer>, AppError> {
        let filter = CustomerFilter::email(email);
        Ok(self
            .customers
            .read()
            .await
            .iter()
            .find(|customer| filter.matches(customer))
            .cloned())
    }

    async fn insert_customer(&self, customer: &Customer) -> Result<(), AppError> {
        let mut record = customer.clone();
        if record.id.is_none() {
            record.id = Some(Bson::ObjectId(ObjectId::new()));
        }
        self.customers.write().await.push(record);
        Ok(())
    }

    async fn count_customers(&self, filter: &CustomerFilter) -> Result<u64, AppError> {
        Ok(self
            .customers
            .read()
            .await
            .iter()
            .filter(|customer| filter.matches(customer))
            .count() as u64)
    }
}
