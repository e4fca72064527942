use crate::models::Customer;
use crate::services::SeedOutcome;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_SEARCH_LIMIT: i64 = 25;

#[derive(Debug, Deserialize, Validate)]
pub struct SearchParams {
    #[validate(length(min = 3, message = "Search query must be at least 3 characters"))]
    pub q: String,
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_SEARCH_LIMIT
}

/// Wire shape of a customer.
///
/// Names are never null; the remaining fields are null when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub postcode: Option<String>,
    pub email: Option<String>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id_string(),
            first_name: customer.first_name.unwrap_or_default(),
            last_name: customer.last_name.unwrap_or_default(),
            phone: customer.phone,
            address: customer.address,
            postcode: customer.postcode,
            email: customer.email,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedResponse {
    pub inserted: u64,
    pub total: u64,
}

impl From<SeedOutcome> for SeedResponse {
    fn from(outcome: SeedOutcome) -> Self {
        Self {
            inserted: outcome.inserted,
            total: outcome.total,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
